use std::collections::HashSet;
use std::fs::File;
use std::io;
use std::path::Path;

use fake::faker::address::en::ZipCode;
use fake::Fake;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::info;
use tracing::warn;

/// Outcome of reading the zip-code reference file. The degraded variants
/// keep the cause, so an absent file can be told apart from a broken one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZipCodeSource {
    Loaded(Vec<String>),
    MissingFile,
    MissingColumn,
    Malformed(String),
}

impl ZipCodeSource {
    pub fn load(path: &Path) -> Self {
        match File::open(path) {
            Ok(file) => Self::from_reader(file),
            Err(err) if err.kind() == io::ErrorKind::NotFound => ZipCodeSource::MissingFile,
            Err(err) => ZipCodeSource::Malformed(err.to_string()),
        }
    }

    /// Accepts a column named "zip" or "ZIP", left-zero-pads each value to
    /// 5 chars and keeps only unique all-digit results.
    pub fn from_reader<R: io::Read>(rdr: R) -> Self {
        let mut rdr = csv::Reader::from_reader(rdr);
        let column = match rdr.headers() {
            Ok(headers) => ["zip", "ZIP"]
                .iter()
                .find_map(|name| headers.iter().position(|h| h == *name)),
            Err(err) => return ZipCodeSource::Malformed(err.to_string()),
        };
        let column = match column {
            Some(column) => column,
            None => return ZipCodeSource::MissingColumn,
        };

        let mut seen = HashSet::new();
        let mut codes = Vec::new();
        for record in rdr.records() {
            let record = match record {
                Ok(record) => record,
                Err(err) => return ZipCodeSource::Malformed(err.to_string()),
            };
            let raw = match record.get(column) {
                Some(raw) => raw.trim(),
                None => continue,
            };
            if raw.is_empty() {
                continue;
            }

            let padded = format!("{raw:0>5}");
            if padded.len() == 5
                && padded.bytes().all(|b| b.is_ascii_digit())
                && seen.insert(padded.clone())
            {
                codes.push(padded);
            }
        }

        // fixed order keeps seeded runs reproducible
        codes.sort();

        ZipCodeSource::Loaded(codes)
    }

    pub fn into_codes(self) -> Vec<String> {
        match self {
            ZipCodeSource::Loaded(codes) => codes,
            _ => Vec::new(),
        }
    }
}

pub struct ZipCodeProvider {
    codes: Vec<String>,
}

impl ZipCodeProvider {
    pub fn new(source: ZipCodeSource) -> Self {
        match &source {
            ZipCodeSource::Loaded(codes) if !codes.is_empty() => {
                info!("loaded {} unique zip codes", codes.len())
            }
            ZipCodeSource::Loaded(_) => {
                warn!("zip code file has no valid 5-digit codes, using synthetic zip codes")
            }
            ZipCodeSource::MissingFile => {
                warn!("zip code file not found, using synthetic zip codes")
            }
            ZipCodeSource::MissingColumn => {
                warn!("no \"zip\" or \"ZIP\" column in zip code file, using synthetic zip codes")
            }
            ZipCodeSource::Malformed(cause) => {
                warn!("can't read zip code file: {cause}, using synthetic zip codes")
            }
        }

        Self {
            codes: source.into_codes(),
        }
    }

    pub fn is_synthetic(&self) -> bool {
        self.codes.is_empty()
    }

    /// Uniform draw from the loaded set, or a faked postcode when nothing
    /// was loaded.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> String {
        match self.codes.choose(rng) {
            Some(code) => code.clone(),
            None => ZipCode().fake_with_rng(rng),
        }
    }
}
