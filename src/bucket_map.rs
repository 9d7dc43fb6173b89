use std::cell::Cell;
use std::fmt;

use tracing::Level;

use crate::error::Error;
use crate::options::{Lookup, MapOptions, Removal};

pub mod dump;
pub mod hash;

pub use dump::Dump;
pub use hash::{CharCodeSum, KeyHasher};

/// Where a `put` landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The key was new to its bucket and was appended, or started the bucket.
    Inserted { bucket: usize },
    /// The key was already chained in its bucket; its value was overwritten.
    Updated { bucket: usize },
}

impl Placement {
    pub fn bucket(&self) -> usize {
        match *self {
            Placement::Inserted { bucket } | Placement::Updated { bucket } => bucket,
        }
    }

    pub fn is_update(&self) -> bool {
        matches!(self, Placement::Updated { .. })
    }
}

/// Counters kept by a map over its lifetime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub hits: usize,
    /// Lookups into an empty bucket, or a full scan that found nothing.
    pub misses: usize,
    /// Lookups into an occupied bucket whose reachable pairs did not match.
    pub conflicts: usize,
    pub inserted: usize,
    pub updated: usize,
    pub removed: usize,
}

impl Stats {
    pub fn lookups(&self) -> usize {
        self.hits + self.misses + self.conflicts
    }

    pub fn hit_rate(&self) -> Option<f64> {
        match self.lookups() {
            0 => None,
            n => Some(self.hits as f64 / n as f64),
        }
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hits: {} Misses: {} Conflicts: {} Inserted: {} Updated: {} Removed: {}",
            self.hits, self.misses, self.conflicts, self.inserted, self.updated, self.removed
        )?;
        if let Some(rate) = self.hit_rate() {
            write!(f, " Hit Rate: {:.3}", rate)?;
        }
        Ok(())
    }
}

/// A hash table with a fixed number of buckets and chained collisions.
///
/// Keys are hashed through their `Display` form and compared with their own
/// `Eq`. The bucket array is sized once at construction and never grows, so
/// chains simply get longer as the table fills.
///
/// Lookup and removal follow the configured [`Lookup`] and [`Removal`]
/// modes. In the default compatibility modes `get` only ever
/// examines the first pair of a bucket, and `delete` removes nothing.
#[derive(Debug)]
pub struct FixedBucketMap<K, V, H = CharCodeSum> {
    buckets: Box<[Option<Vec<(K, V)>>]>,
    options: MapOptions,
    hasher: H,
    len: usize,
    lookups: Cell<(usize, usize, usize)>,
    writes: Stats,
}

impl<K, V> FixedBucketMap<K, V, CharCodeSum> {
    /// A compatibility-mode map with `bucket_count` buckets.
    pub fn new(bucket_count: usize) -> Result<Self, Error> {
        Self::with_options(MapOptions::compatible().with_bucket_count(bucket_count))
    }

    pub fn with_options(options: MapOptions) -> Result<Self, Error> {
        Self::with_hasher(options, CharCodeSum)
    }
}

impl<K, V, H> FixedBucketMap<K, V, H> {
    pub fn with_hasher(options: MapOptions, hasher: H) -> Result<Self, Error> {
        if options.bucket_count == 0 {
            return Err(Error::ZeroBuckets);
        }
        Ok(FixedBucketMap {
            buckets: (0..options.bucket_count).map(|_| None).collect(),
            options,
            hasher,
            len: 0,
            lookups: Cell::new((0, 0, 0)),
            writes: Stats::default(),
        })
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Number of stored pairs.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets holding at least one pair.
    pub fn occupied_buckets(&self) -> usize {
        self.buckets.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn options(&self) -> &MapOptions {
        &self.options
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    pub fn stats(&self) -> Stats {
        let (hits, misses, conflicts) = self.lookups.get();
        Stats {
            hits,
            misses,
            conflicts,
            ..self.writes
        }
    }

    /// The chain stored at `index`, or `None` for an empty or out of range
    /// slot.
    pub fn bucket(&self, index: usize) -> Option<&[(K, V)]> {
        self.buckets.get(index)?.as_deref()
    }

    /// Walks the non-empty buckets in array order.
    pub fn dump(&self) -> Dump<'_, K, V> {
        Dump::new(&self.buckets)
    }

    /// Empties every bucket. Bucket count, options and stats are kept.
    pub fn clear(&mut self) {
        self.buckets.iter_mut().for_each(|slot| *slot = None);
        self.len = 0;
    }

    fn count_lookup(&self, outcome: LookupOutcome) {
        let (mut hits, mut misses, mut conflicts) = self.lookups.get();
        match outcome {
            LookupOutcome::Hit => hits += 1,
            LookupOutcome::Miss => misses += 1,
            LookupOutcome::Conflict => conflicts += 1,
        }
        self.lookups.set((hits, misses, conflicts));
    }
}

#[derive(Clone, Copy)]
enum LookupOutcome {
    Hit,
    Miss,
    Conflict,
}

impl<K, V, H> FixedBucketMap<K, V, H>
where
    K: fmt::Display + Eq,
    H: KeyHasher,
{
    /// Bucket index of `key`: the hash of its string form modulo the bucket
    /// count.
    pub fn hash_of(&self, key: &K) -> usize {
        let raw = self.hasher.hash_key(&key.to_string());
        (raw % self.buckets.len() as u64) as usize
    }

    /// Stores `value` under `key`, overwriting the value in place when the
    /// key is already chained in its bucket.
    pub fn put(&mut self, key: K, value: V) -> Placement {
        let bucket = self.hash_of(&key);
        let slot = &mut self.buckets[bucket];
        let Some(chain) = slot.as_mut() else {
            tracing::event!(Level::DEBUG, %key, bucket, "Started bucket");
            *slot = Some(vec![(key, value)]);
            self.len += 1;
            self.writes.inserted += 1;
            return Placement::Inserted { bucket };
        };
        if let Some((_, stored)) = chain.iter_mut().find(|(k, _)| *k == key) {
            tracing::event!(Level::DEBUG, %key, bucket, "Updated value");
            *stored = value;
            self.writes.updated += 1;
            return Placement::Updated { bucket };
        }
        tracing::event!(Level::DEBUG, %key, bucket, chain = chain.len(), "Chained after collision");
        chain.push((key, value));
        self.len += 1;
        self.writes.inserted += 1;
        Placement::Inserted { bucket }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        let bucket = self.hash_of(key);
        let Some(chain) = &self.buckets[bucket] else {
            tracing::event!(Level::TRACE, %key, bucket, "Empty bucket");
            self.count_lookup(LookupOutcome::Miss);
            return None;
        };
        let reachable = match self.options.lookup {
            Lookup::FirstPair => &chain[..chain.len().min(1)],
            Lookup::FullScan => &chain[..],
        };
        match reachable.iter().find(|(k, _)| k == key) {
            Some((_, value)) => {
                self.count_lookup(LookupOutcome::Hit);
                Some(value)
            }
            None => {
                let outcome = match self.options.lookup {
                    Lookup::FirstPair => LookupOutcome::Conflict,
                    Lookup::FullScan => LookupOutcome::Miss,
                };
                tracing::event!(
                    Level::TRACE,
                    %key,
                    bucket,
                    lookup = %self.options.lookup,
                    "No such key"
                );
                self.count_lookup(outcome);
                None
            }
        }
    }

    /// In `Removal::Retain` mode the bucket is walked and logged but nothing
    /// is removed and `None` is returned. In `Removal::Remove` mode the
    /// matching pair is taken out and its value returned; a bucket left empty
    /// goes back to being an empty slot.
    pub fn delete(&mut self, key: &K) -> Option<V> {
        let bucket = self.hash_of(key);
        let slot = &mut self.buckets[bucket];
        let Some(chain) = slot.as_mut() else {
            tracing::event!(Level::DEBUG, %key, bucket, "Nothing to delete");
            return None;
        };
        match self.options.removal {
            Removal::Retain => {
                for (position, (stored, _)) in chain.iter().enumerate() {
                    tracing::event!(Level::DEBUG, bucket, position, key = %stored, "Retained");
                }
                None
            }
            Removal::Remove => {
                let position = chain.iter().position(|(k, _)| k == key)?;
                let (_, value) = chain.remove(position);
                if chain.is_empty() {
                    *slot = None;
                }
                tracing::event!(Level::DEBUG, %key, bucket, position, "Removed");
                self.len -= 1;
                self.writes.removed += 1;
                Some(value)
            }
        }
    }
}

impl<K, V, H> fmt::Display for FixedBucketMap<K, V, H>
where
    K: fmt::Display,
    V: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--Phonebook--")?;
        for chain in self.dump() {
            let pairs: Vec<String> = chain.iter().map(|(k, v)| format!("{k}: {v}")).collect();
            writeln!(f, "[{}]", pairs.join(", "))?;
        }
        Ok(())
    }
}
