use std::fmt;

use crate::error::Error;

/// Bucket count of a phonebook built with default options.
pub const DEFAULT_BUCKETS: usize = 4;

/// How `get` walks a bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lookup {
    /// Only the first stored pair of a bucket is examined. A key chained
    /// behind a non-matching pair is unreachable.
    #[default]
    FirstPair,
    /// Every pair of the bucket is examined in insertion order.
    FullScan,
}

/// What `delete` does with a matching pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Removal {
    /// The bucket is walked for diagnostics and left untouched.
    #[default]
    Retain,
    /// The matching pair is taken out of its bucket.
    Remove,
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Lookup::FirstPair => "first",
                Lookup::FullScan => "full",
            }
        )
    }
}

impl fmt::Display for Removal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Removal::Retain => "retain",
                Removal::Remove => "remove",
            }
        )
    }
}

/// Construction-time configuration of a `FixedBucketMap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapOptions {
    pub bucket_count: usize,
    pub lookup: Lookup,
    pub removal: Removal,
}

impl Default for MapOptions {
    fn default() -> MapOptions {
        MapOptions::compatible()
    }
}

impl MapOptions {
    /// First-pair lookup and no-op removal. The default.
    pub fn compatible() -> MapOptions {
        MapOptions {
            bucket_count: DEFAULT_BUCKETS,
            lookup: Lookup::FirstPair,
            removal: Removal::Retain,
        }
    }

    /// Full bucket scans and real removal.
    pub fn corrected() -> MapOptions {
        MapOptions {
            bucket_count: DEFAULT_BUCKETS,
            lookup: Lookup::FullScan,
            removal: Removal::Remove,
        }
    }

    pub fn with_bucket_count(self, bucket_count: usize) -> MapOptions {
        MapOptions {
            bucket_count,
            ..self
        }
    }

    /// Sets one option from its textual name and value. Returns the name of
    /// the option that changed.
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<&'static str, Error> {
        let invalid = || Error::InvalidOptionValue {
            name: name.to_string(),
            value: value.to_string(),
        };
        match name {
            "BucketCount" => {
                let count: usize = value.parse().map_err(|_| invalid())?;
                if count == 0 {
                    return Err(Error::ZeroBuckets);
                }
                self.bucket_count = count;
                Ok("BucketCount")
            }
            "Lookup" => {
                self.lookup = match value.to_ascii_lowercase().as_str() {
                    "first" => Lookup::FirstPair,
                    "full" => Lookup::FullScan,
                    _ => return Err(invalid()),
                };
                Ok("Lookup")
            }
            "Removal" => {
                self.removal = match value.to_ascii_lowercase().as_str() {
                    "retain" => Removal::Retain,
                    "remove" => Removal::Remove,
                    _ => return Err(invalid()),
                };
                Ok("Removal")
            }
            _ => Err(Error::UnknownOption(name.to_string())),
        }
    }
}

impl fmt::Display for MapOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BucketCount {} Lookup {} Removal {}",
            self.bucket_count, self.lookup, self.removal
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_compatible() {
        let options = MapOptions::default();
        assert_eq!(options.bucket_count, 4);
        assert_eq!(options.lookup, Lookup::FirstPair);
        assert_eq!(options.removal, Removal::Retain);
        assert_eq!(options, MapOptions::compatible());
    }

    #[test]
    fn set_options_by_name() {
        let mut options = MapOptions::default();
        assert_eq!(options.set_option("BucketCount", "16"), Ok("BucketCount"));
        assert_eq!(options.set_option("Lookup", "FULL"), Ok("Lookup"));
        assert_eq!(options.set_option("Removal", "remove"), Ok("Removal"));
        assert_eq!(options, MapOptions::corrected().with_bucket_count(16));
        assert_eq!(
            options.to_string(),
            "BucketCount 16 Lookup full Removal remove"
        );
    }

    #[test]
    fn bad_options_leave_state_alone() {
        let mut options = MapOptions::default();
        assert_eq!(options.set_option("BucketCount", "0"), Err(Error::ZeroBuckets));
        assert_eq!(
            options.set_option("BucketCount", "-3"),
            Err(Error::InvalidOptionValue {
                name: "BucketCount".to_string(),
                value: "-3".to_string()
            })
        );
        assert!(matches!(
            options.set_option("Lookup", "sideways"),
            Err(Error::InvalidOptionValue { .. })
        ));
        assert_eq!(
            options.set_option("Threads", "4"),
            Err(Error::UnknownOption("Threads".to_string()))
        );
        assert_eq!(options, MapOptions::default());
    }
}
