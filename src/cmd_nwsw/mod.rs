//! Subcommand modules for the `nwsw` binary.

pub mod nw;
pub mod pair;
pub mod sw;

use clap::*;
use nwsw::libs::align::{align, AlignMode, GapPenalty, Scorer, SubstMatrix};
use nwsw::libs::seq::{load_sequence, SeqData};
use std::io::Write;

pub fn arg_gap() -> Arg {
    Arg::new("gap")
        .long("gap")
        .short('g')
        .num_args(1..)
        .allow_negative_numbers(true)
        .action(ArgAction::Append)
        .help("Gap penalty: none for linear 3, <rate> for linear, <extend> <open> for affine")
}

pub fn arg_outfile() -> Arg {
    Arg::new("outfile")
        .long("outfile")
        .short('o')
        .num_args(1)
        .default_value("stdout")
        .help("Output filename. [stdout] for screen")
}

pub fn arg_verbose() -> Arg {
    Arg::new("verbose")
        .long("verbose")
        .short('v')
        .action(ArgAction::SetTrue)
        .help("Print run details to stderr")
}

pub fn gap_of(args: &ArgMatches) -> anyhow::Result<GapPenalty> {
    let params: Vec<&String> = args
        .get_many::<String>("gap")
        .map(|vals| vals.collect())
        .unwrap_or_default();
    Ok(GapPenalty::from_params(&params)?)
}

/// File mode shared by `nw` and `sw`: two sequence files and a matrix file.
pub fn run_files(mode: AlignMode, args: &ArgMatches) -> anyhow::Result<()> {
    let verbose = args.get_flag("verbose");

    let seq1 = load_sequence(args.get_one::<String>("seq1").unwrap())?;
    let seq2 = load_sequence(args.get_one::<String>("seq2").unwrap())?;
    let matrix = SubstMatrix::from_file(args.get_one::<String>("matrix").unwrap())?;
    let gap = gap_of(args)?;

    if verbose {
        eprintln!("==> Matrix");
        eprintln!("    alphabet = {}", String::from_utf8_lossy(matrix.alphabet()));
    }

    let mut writer = nwsw::writer(args.get_one::<String>("outfile").unwrap())?;
    run(mode, &seq1, &seq2, &matrix, &gap, &mut writer, verbose)
}

/// Aligns and writes every optimal alignment as a block of two FASTA records.
pub fn run<S: Scorer + ?Sized>(
    mode: AlignMode,
    seq1: &SeqData,
    seq2: &SeqData,
    scorer: &S,
    gap: &GapPenalty,
    writer: &mut dyn Write,
    verbose: bool,
) -> anyhow::Result<()> {
    if verbose {
        eprintln!("==> Inputs");
        for data in [seq1, seq2] {
            eprintln!("    {} = {} symbols", data.name, data.len());
            for header in &data.info {
                eprintln!("        >{}", header);
            }
        }
        eprintln!("==> Parameters");
        eprintln!("    mode = {}", mode);
        eprintln!("    gap  = {}", gap);
    }

    let alignments = align(mode, &seq1.seq, &seq2.seq, scorer, gap)?;

    let mut count = 0;
    for pair in &alignments {
        writer.write_fmt(format_args!(
            ">{}\n{}\n>{}\n{}\n\n",
            seq1.name, pair.first, seq2.name, pair.second
        ))?;
        count += 1;
    }
    writer.flush()?;

    if verbose {
        eprintln!("==> Result");
        eprintln!("    score      = {}", alignments.score());
        eprintln!("    alignments = {}", count);
    }

    Ok(())
}
