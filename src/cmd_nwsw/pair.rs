use clap::*;
use nwsw::libs::align::{AlignMode, MatchMismatch};
use nwsw::libs::seq::SeqData;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("pair")
        .about("Aligns two sequences given on the command line")
        .after_help(
            r###"
Scores identical symbols with --match and all other pairs with --mismatch,
so any alphabet works without a matrix file. Output records are named
'seq1' and 'seq2'.

Examples:
1. Global alignment with the default scores:
   nwsw pair GCATGCG GATTACA --gap 1

2. Local alignment:
   nwsw pair GTTGAC GTTAC --match 2 --mismatch -1 --gap 2 --local
   nwsw pair GTTGAC GTTAC --match 2 --mismatch -1 --gap 2 --mode sw

"###,
        )
        .arg(
            Arg::new("seq1")
                .required(true)
                .index(1)
                .help("First sequence"),
        )
        .arg(
            Arg::new("seq2")
                .required(true)
                .index(2)
                .help("Second sequence"),
        )
        .arg(
            Arg::new("match")
                .long("match")
                .num_args(1)
                .default_value("1")
                .allow_negative_numbers(true)
                .value_parser(value_parser!(f64))
                .help("Score of identical symbols"),
        )
        .arg(
            Arg::new("mismatch")
                .long("mismatch")
                .num_args(1)
                .default_value("-1")
                .allow_negative_numbers(true)
                .value_parser(value_parser!(f64))
                .help("Score of different symbols"),
        )
        .arg(
            Arg::new("mode")
                .long("mode")
                .num_args(1)
                .default_value("global")
                .help("Alignment mode: global (nw) or local (sw)"),
        )
        .arg(
            Arg::new("local")
                .long("local")
                .short('l')
                .action(ArgAction::SetTrue)
                .help("Same as --mode local"),
        )
        .arg(super::arg_gap())
        .arg(super::arg_outfile())
        .arg(super::arg_verbose())
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    let seq1 = SeqData::new("seq1", args.get_one::<String>("seq1").unwrap().trim().as_bytes());
    let seq2 = SeqData::new("seq2", args.get_one::<String>("seq2").unwrap().trim().as_bytes());

    let scorer = MatchMismatch::new(
        *args.get_one::<f64>("match").unwrap(),
        *args.get_one::<f64>("mismatch").unwrap(),
    );
    let gap = super::gap_of(args)?;
    let mode = if args.get_flag("local") {
        AlignMode::Local
    } else {
        args.get_one::<String>("mode").unwrap().parse::<AlignMode>()?
    };
    let verbose = args.get_flag("verbose");

    let mut writer = nwsw::writer(args.get_one::<String>("outfile").unwrap())?;
    super::run(mode, &seq1, &seq2, &scorer, &gap, &mut writer, verbose)
}
