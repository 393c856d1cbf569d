use std::io::{BufRead, BufReader, BufWriter, Write};

/// Opens `input` for reading; `stdin` is standard input and `.gz` files are
/// decompressed on the fly.
///
/// ```
/// use std::io::BufRead;
/// let reader = nwsw::reader("tests/fasta/test1a.fa").unwrap();
/// assert_eq!(reader.lines().count(), 2);
///
/// assert!(nwsw::reader("tests/fasta/missing.fa").is_err());
/// ```
pub fn reader(input: &str) -> anyhow::Result<Box<dyn BufRead>> {
    let reader: Box<dyn BufRead> = if input == "stdin" {
        Box::new(BufReader::new(std::io::stdin()))
    } else {
        let path = std::path::Path::new(input);
        let file = std::fs::File::open(path)
            .map_err(|why| anyhow::anyhow!("could not open {}: {}", path.display(), why))?;

        if path.extension() == Some(std::ffi::OsStr::new("gz")) {
            Box::new(BufReader::new(flate2::read::MultiGzDecoder::new(file)))
        } else {
            Box::new(BufReader::new(file))
        }
    };

    Ok(reader)
}

/// Opens `output` for writing; `stdout` is standard output.
pub fn writer(output: &str) -> anyhow::Result<Box<dyn Write>> {
    let writer: Box<dyn Write> = if output == "stdout" {
        Box::new(BufWriter::new(std::io::stdout()))
    } else {
        let file = std::fs::File::create(output)
            .map_err(|why| anyhow::anyhow!("could not create {}: {}", output, why))?;
        Box::new(BufWriter::new(file))
    };

    Ok(writer)
}
