extern crate clap;
use clap::*;

mod cmd_nwsw;

fn main() -> anyhow::Result<()> {
    let app = Command::new("nwsw")
        .version(crate_version!())
        .author(crate_authors!())
        .about("`nwsw` - Needleman-Wunsch and Smith-Waterman with every optimal alignment")
        .propagate_version(true)
        .arg_required_else_help(true)
        .color(ColorChoice::Auto)
        .subcommand(cmd_nwsw::nw::make_subcommand())
        .subcommand(cmd_nwsw::sw::make_subcommand())
        .subcommand(cmd_nwsw::pair::make_subcommand())
        .after_help(
            r###"Subcommands:

* Sequence files + substitution matrix:
    * nw   - global alignment
    * sw   - local alignment

* Sequences on the command line + match/mismatch scores:
    * pair - global, or local with --local

"###,
        );

    // Check which subcomamnd the user ran...
    match app.get_matches().subcommand() {
        Some(("nw", sub_matches)) => cmd_nwsw::nw::execute(sub_matches),
        Some(("sw", sub_matches)) => cmd_nwsw::sw::execute(sub_matches),
        Some(("pair", sub_matches)) => cmd_nwsw::pair::execute(sub_matches),
        _ => unreachable!(),
    }?;

    Ok(())
}
