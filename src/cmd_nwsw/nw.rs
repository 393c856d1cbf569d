use clap::*;
use nwsw::libs::align::AlignMode;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("nw")
        .about("Global alignment (Needleman-Wunsch) of two sequence files")
        .after_help(
            r###"
Reports every optimal global alignment, each as a block of two FASTA records
followed by an empty line. Gaps are written as '_'.

Sequence files are FASTA or plain text. All records of a FASTA file are joined
into one sequence. The matrix file is whitespace separated, with a header line
of symbols (or three-letter amino acid codes) and one labelled row per symbol.

Gap penalty:
* no --gap       linear, 3 per gap symbol
* --gap 2        linear, 2 per gap symbol
* --gap 1 5      affine, a gap of k symbols costs 5 + k * 1

Notes:
* Supports both plain text and gzipped (.gz) files
* Reads from stdin if input file is 'stdin'
* Put --gap after the input files

Examples:
1. Default linear gap:
   nwsw nw seq1.fa seq2.fa --matrix BLOSUM62.txt

2. Affine gap, extend 1, open 10:
   nwsw nw seq1.fa seq2.fa --matrix BLOSUM62.txt --gap 1 10

"###,
        )
        .arg(
            Arg::new("seq1")
                .required(true)
                .index(1)
                .help("First sequence file"),
        )
        .arg(
            Arg::new("seq2")
                .required(true)
                .index(2)
                .help("Second sequence file"),
        )
        .arg(
            Arg::new("matrix")
                .long("matrix")
                .short('m')
                .required(true)
                .num_args(1)
                .help("Substitution matrix file"),
        )
        .arg(super::arg_gap())
        .arg(super::arg_outfile())
        .arg(super::arg_verbose())
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    super::run_files(AlignMode::Global, args)
}
