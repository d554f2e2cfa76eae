use std::collections::VecDeque;
use std::io::BufRead;
use crate::record::Record;
use crate::result::{DecodeError, LoadError};

/// Pulls `<index> <token>` pairs out of a whitespace separated stream and
/// decodes them into [`Record`](enum.Record.html)s.
///
/// Line breaks carry no meaning, so a pair may span lines. Pairs whose token
/// has an unrecognized length are skipped. A malformed pair is yielded as an
/// error and reading carries on with the next pair; that includes a pair
/// that is not valid UTF-8. An I/O error is yielded once and ends the stream.
pub struct Decoder<R> {
    reader: R,
    pending: VecDeque<Vec<u8>>,
    pairs_read: usize,
    done: bool,
}

impl<R: BufRead> Decoder<R> {
    pub fn new(reader: R) -> Decoder<R> {
        Decoder {
            reader,
            pending: VecDeque::new(),
            pairs_read: 0,
            done: false,
        }
    }

    /// Number of complete pairs consumed so far, including ignored ones.
    pub fn pairs_read(&self) -> usize {
        self.pairs_read
    }

    fn next_token(&mut self) -> Result<Option<Vec<u8>>, LoadError> {
        while self.pending.is_empty() {
            let mut line = Vec::new();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                line.split(u8::is_ascii_whitespace)
                    .filter(|t| !t.is_empty())
                    .map(<[u8]>::to_vec),
            );
        }
        Ok(self.pending.pop_front())
    }

    fn next_pair(&mut self) -> Result<Option<(Vec<u8>, Vec<u8>)>, LoadError> {
        let index = match self.next_token()? {
            Some(index) => index,
            None => return Ok(None),
        };
        match self.next_token()? {
            Some(token) => Ok(Some((index, token))),
            None => {
                log::debug!("Dropping index '{}' with no token at end of input",
                    String::from_utf8_lossy(&index));
                Ok(None)
            }
        }
    }
}

impl<R: BufRead> Iterator for Decoder<R> {
    type Item = Result<Record, LoadError>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let (index, token) = match self.next_pair() {
                Ok(Some(pair)) => pair,
                Ok(None) => {
                    self.done = true;
                    return None;
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            };
            self.pairs_read += 1;

            let (index, token) = match (utf8(index), utf8(token)) {
                (Ok(index), Ok(token)) => (index, token),
                (Err(source), _) | (_, Err(source)) => {
                    return Some(Err(LoadError::Decode { pair: self.pairs_read, source }));
                }
            };

            match Record::decode(&index, &token) {
                Ok(Some(record)) => return Some(Ok(record)),
                Ok(None) => {
                    log::debug!("Ignoring pair #{} '{} {}': unrecognized token length {}",
                        self.pairs_read, index, token, token.chars().count());
                }
                Err(source) => {
                    return Some(Err(LoadError::Decode { pair: self.pairs_read, source }));
                }
            }
        }
        None
    }
}

fn utf8(bytes: Vec<u8>) -> Result<String, DecodeError> {
    String::from_utf8(bytes)
        .map_err(|e| DecodeError::NotUtf8(String::from_utf8_lossy(e.as_bytes()).into_owned()))
}
