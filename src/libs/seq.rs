use std::io::{BufReader, Read};
use std::path::Path;

/// A sequence to align plus what its file said about it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeqData {
    pub name: String,
    /// Header lines of the FASTA records, without the leading `>`
    pub info: Vec<String>,
    pub seq: Vec<u8>,
}

impl SeqData {
    pub fn new(name: &str, seq: &[u8]) -> Self {
        Self {
            name: name.to_string(),
            info: vec![],
            seq: seq.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }
}

/// Loads one sequence from `infile`.
///
/// FASTA input, recognised by a leading `>`, may hold several records; their
/// sequences are joined in order and every header goes to `info`. The name is
/// that of the first record. Anything else is read as plain text, one or more
/// lines joined after trimming, named after the file stem.
///
/// ```
/// let data = nwsw::libs::seq::load_sequence("tests/fasta/test1a.fa").unwrap();
/// assert_eq!(data.name, "test1a");
/// assert_eq!(data.seq, b"GTTGAC");
/// ```
pub fn load_sequence(infile: &str) -> anyhow::Result<SeqData> {
    let mut buf = vec![];
    crate::libs::io::reader(infile)?.read_to_end(&mut buf)?;

    let start = buf
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(buf.len());
    if buf.get(start) == Some(&b'>') {
        parse_fasta(&buf[start..])
    } else {
        parse_plain(&buf, &stem_of(infile))
    }
}

fn parse_fasta(buf: &[u8]) -> anyhow::Result<SeqData> {
    let mut fa_in = noodles_fasta::io::Reader::new(BufReader::new(buf));

    let mut data = SeqData::default();
    for result in fa_in.records() {
        let record = result?;
        let name = String::from_utf8(record.name().into())?;

        let header = match record.description() {
            Some(desc) => format!("{} {}", name, String::from_utf8_lossy(desc.as_ref())),
            None => name.clone(),
        };
        if data.info.is_empty() {
            data.name = name;
        }
        data.info.push(header);
        data.seq.extend_from_slice(record.sequence().as_ref());
    }

    Ok(data)
}

fn parse_plain(buf: &[u8], name: &str) -> anyhow::Result<SeqData> {
    let text = std::str::from_utf8(buf)?;

    let mut seq = vec![];
    for line in text.lines() {
        seq.extend_from_slice(line.trim().as_bytes());
    }

    Ok(SeqData {
        name: name.to_string(),
        info: vec![],
        seq,
    })
}

/// `seq.fa.gz` -> `seq`; standard input is called `stdin`.
fn stem_of(infile: &str) -> String {
    let path = Path::new(infile);
    let path = if path.extension() == Some(std::ffi::OsStr::new("gz")) {
        Path::new(path.file_stem().unwrap_or_default())
    } else {
        path
    };

    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| infile.to_string())
}
