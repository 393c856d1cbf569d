use super::error::AlignError;
use std::collections::HashSet;
use std::io::Read;

/// Similarity score of an ordered pair of symbols.
///
/// `None` marks a pair the scorer knows nothing about; the fillers turn it
/// into [`AlignError::Lookup`].
pub trait Scorer {
    fn score(&self, a: u8, b: u8) -> Option<f64>;
}

impl<T: Scorer + ?Sized> Scorer for &T {
    fn score(&self, a: u8, b: u8) -> Option<f64> {
        (**self).score(a, b)
    }
}

/// Two-value scoring: identical symbols get `match_score`, all other pairs
/// get `mismatch_score`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatchMismatch {
    pub match_score: f64,
    pub mismatch_score: f64,
}

impl MatchMismatch {
    pub fn new(match_score: f64, mismatch_score: f64) -> Self {
        Self {
            match_score,
            mismatch_score,
        }
    }
}

impl Default for MatchMismatch {
    fn default() -> Self {
        Self::new(1.0, -1.0)
    }
}

impl Scorer for MatchMismatch {
    fn score(&self, a: u8, b: u8) -> Option<f64> {
        if a == b {
            Some(self.match_score)
        } else {
            Some(self.mismatch_score)
        }
    }
}

/// A square substitution matrix indexed by an alphabet.
#[derive(Clone, Debug, PartialEq)]
pub struct SubstMatrix {
    alphabet: Vec<u8>,
    values: Vec<Vec<f64>>,
}

impl SubstMatrix {
    /// Creates a matrix from its alphabet and rows of scores.
    ///
    /// The table must be `alphabet.len()` x `alphabet.len()` and the alphabet
    /// must not repeat a symbol.
    pub fn new(alphabet: Vec<u8>, values: Vec<Vec<f64>>) -> Result<Self, AlignError> {
        let size = alphabet.len();
        if size == 0 {
            return Err(AlignError::ScoringDimension("empty alphabet".to_string()));
        }

        let mut seen = HashSet::new();
        for &symbol in &alphabet {
            if !seen.insert(symbol) {
                return Err(AlignError::ScoringDimension(format!(
                    "symbol {:?} appears twice",
                    char::from(symbol)
                )));
            }
        }

        if values.len() != size {
            return Err(AlignError::ScoringDimension(format!(
                "expected {} rows, found {}",
                size,
                values.len()
            )));
        }
        for (i, row) in values.iter().enumerate() {
            if row.len() != size {
                return Err(AlignError::ScoringDimension(format!(
                    "row {} has {} values, expected {}",
                    i + 1,
                    row.len(),
                    size
                )));
            }
        }

        Ok(Self { alphabet, values })
    }

    /// Parses a whitespace separated matrix.
    ///
    /// The first line lists the symbols, either as single characters or as
    /// three-letter amino acid codes. When it is as long as the first data
    /// row, its first token is the blank corner and is dropped. Every data row
    /// is a row label followed by one score per symbol. Blank lines and lines
    /// starting with `#` are skipped.
    ///
    /// ```
    /// use nwsw::libs::align::{Scorer, SubstMatrix};
    ///
    /// let text = "\
    /// ## tiny DNA matrix
    ///    A  C
    /// A  2 -1
    /// C -1  2
    /// ";
    /// let matrix = SubstMatrix::from_text(text).unwrap();
    /// assert_eq!(matrix.score(b'A', b'A'), Some(2.0));
    /// assert_eq!(matrix.score(b'A', b'G'), None);
    /// ```
    pub fn from_text(text: &str) -> Result<Self, AlignError> {
        let rows: Vec<Vec<&str>> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|line| line.split_whitespace().collect())
            .collect();

        let (header, body) = rows
            .split_first()
            .ok_or_else(|| AlignError::ScoringDimension("no header line".to_string()))?;
        let first_row_len = body.first().map(Vec::len).unwrap_or(0);

        let keys = if header.len() == first_row_len {
            &header[1..]
        } else {
            &header[..]
        };

        let mut alphabet = Vec::with_capacity(keys.len());
        for key in keys {
            alphabet.push(symbol_of(key)?);
        }

        let mut values = Vec::with_capacity(body.len());
        for (i, row) in body.iter().enumerate() {
            let mut parsed = Vec::with_capacity(row.len().saturating_sub(1));
            for token in row.iter().skip(1) {
                let value = token.parse::<f64>().map_err(|_| {
                    AlignError::ScoringDimension(format!(
                        "row {}: {:?} is not a number",
                        i + 1,
                        token
                    ))
                })?;
                parsed.push(value);
            }
            values.push(parsed);
        }

        Self::new(alphabet, values)
    }

    /// Reads a matrix file; `stdin` and gzipped files are accepted.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let mut text = String::new();
        crate::libs::io::reader(path)?.read_to_string(&mut text)?;
        Ok(Self::from_text(&text)?)
    }

    pub fn alphabet(&self) -> &[u8] {
        &self.alphabet
    }

    fn index_of(&self, symbol: u8) -> Option<usize> {
        self.alphabet.iter().position(|&s| s == symbol)
    }
}

impl Scorer for SubstMatrix {
    fn score(&self, a: u8, b: u8) -> Option<f64> {
        let i = self.index_of(a)?;
        let j = self.index_of(b)?;
        Some(self.values[i][j])
    }
}

/// Matrix key to symbol: one character as is, three letters as an amino acid code.
fn symbol_of(key: &str) -> Result<u8, AlignError> {
    match key.as_bytes() {
        [symbol] => Ok(*symbol),
        _ => one_letter_code(key).ok_or_else(|| {
            AlignError::ScoringDimension(format!("unknown matrix key {:?}", key))
        }),
    }
}

/// Converts a three-letter amino acid code to its one-letter code.
pub fn one_letter_code(code: &str) -> Option<u8> {
    let symbol = match code.to_ascii_lowercase().as_str() {
        "ala" => b'A',
        "arg" => b'R',
        "asn" => b'N',
        "asp" => b'D',
        "asx" => b'B',
        "cys" => b'C',
        "glu" => b'E',
        "gln" => b'Q',
        "glx" => b'Z',
        "gly" => b'G',
        "his" => b'H',
        "ile" => b'I',
        "leu" => b'L',
        "lys" => b'K',
        "met" => b'M',
        "phe" => b'F',
        "pro" => b'P',
        "ser" => b'S',
        "thr" => b'T',
        "trp" => b'W',
        "tyr" => b'Y',
        "val" => b'V',
        _ => return None,
    };
    Some(symbol)
}
