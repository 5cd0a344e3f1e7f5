//! Root set assembly.
use std::collections::BTreeMap;

use num_bigint::BigInt;

use crate::{
    common::logger::get_logger,
    decoder::decode,
    errors::{DecodeError, Error},
    reducer::reduce,
};

/// Root set parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RootSetDescriptor {
    /// The upper bound on root indices, roots with larger indices are ignored.
    n: u64,
    /// The number of roots used to compute the constant term.
    k: u64,
}

impl RootSetDescriptor {
    /// Creates a new descriptor, verifying that `1 <= k <= n`.
    pub fn new(n: i64, k: i64) -> Result<Self, Error> {
        if n < 1 || k < 1 || k > n {
            return Err(Error::MalformedDescriptor { n, k });
        }
        Ok(Self {
            n: n as u64,
            k: k as u64,
        })
    }

    /// Returns the upper bound on root indices.
    pub fn n(&self) -> u64 {
        self.n
    }

    /// Returns the number of required roots.
    pub fn k(&self) -> u64 {
        self.k
    }
}

/// An encoded root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RootEntry {
    /// The index of the root.
    pub index: u64,
    /// The base in which the value is encoded, anything outside `2..=36` is
    /// rejected when decoding.
    pub base: i64,
    /// The encoded value.
    pub value: String,
}

impl RootEntry {
    /// Creates a new root entry.
    pub fn new(index: u64, base: i64, value: impl Into<String>) -> Self {
        Self {
            index,
            base,
            value: value.into(),
        }
    }

    /// Decodes the value of the root.
    pub fn decode(&self) -> Result<BigInt, DecodeError> {
        decode(self.base, &self.value)
    }
}

/// A decoded root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedRoot {
    /// The index of the root.
    pub index: u64,
    /// The value of the root.
    pub value: BigInt,
}

/// A constructor of the constant term from a root set.
pub struct Assembler {
    descriptor: RootSetDescriptor,
    logger: slog::Logger,
}

impl Assembler {
    /// Creates a new assembler.
    pub fn new(descriptor: RootSetDescriptor) -> Self {
        Self {
            descriptor,
            logger: get_logger("assembler"),
        }
    }

    /// Decodes all roots with indices in `1..=n` and returns the first `k`
    /// of them in ascending index order.
    ///
    /// Roots are identified by their key in the given map.
    pub fn select_roots(
        &self,
        entries: &BTreeMap<u64, RootEntry>,
    ) -> Result<Vec<DecodedRoot>, Error> {
        let n = self.descriptor.n;
        let k = self.descriptor.k;

        let mut roots = Vec::new();
        for (&index, entry) in entries.range(1..=n) {
            let value = entry
                .decode()
                .map_err(|source| Error::InvalidRoot { index, source })?;
            debug!(self.logger, "decoded root";
                "index" => index,
                "base" => entry.base,
                "digits" => entry.value.len()
            );
            roots.push(DecodedRoot { index, value });
        }

        let available = roots.len() as u64;
        if available < k {
            return Err(Error::InsufficientRoots {
                required: k,
                available,
            });
        }

        let ignored = entries.len() as u64 - available;
        if ignored > 0 {
            debug!(self.logger, "ignored out of range roots"; "count" => ignored, "n" => n);
        }

        roots.truncate(k as usize);
        Ok(roots)
    }

    /// Computes the constant term from the first `k` roots.
    pub fn constant_term(&self, entries: &BTreeMap<u64, RootEntry>) -> Result<BigInt, Error> {
        let roots: Vec<BigInt> = self
            .select_roots(entries)?
            .into_iter()
            .map(|root| root.value)
            .collect();
        let constant_term = reduce(&roots)?;

        debug!(self.logger, "computed constant term";
            "roots" => roots.len(),
            "bits" => constant_term.bits()
        );

        Ok(constant_term)
    }
}

/// Computes the constant term of the polynomial whose roots are described
/// by the given descriptor and entries.
pub fn compute_constant_term(
    descriptor: &RootSetDescriptor,
    entries: &BTreeMap<u64, RootEntry>,
) -> Result<BigInt, Error> {
    Assembler::new(*descriptor).constant_term(entries)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use num_bigint::BigInt;

    use super::{compute_constant_term, Assembler, RootEntry, RootSetDescriptor};
    use crate::errors::{DecodeError, Error};

    fn root_entries(roots: &[(u64, i64, &str)]) -> BTreeMap<u64, RootEntry> {
        roots
            .iter()
            .map(|&(index, base, value)| (index, RootEntry::new(index, base, value)))
            .collect()
    }

    #[test]
    fn test_descriptor() {
        let descriptor = RootSetDescriptor::new(4, 3).expect("descriptor should be valid");
        assert_eq!(descriptor.n(), 4);
        assert_eq!(descriptor.k(), 3);

        assert!(RootSetDescriptor::new(1, 1).is_ok());
        assert!(RootSetDescriptor::new(i64::MAX, 1).is_ok());

        for (n, k) in [(3, 4), (0, 0), (0, 1), (1, 0), (-1, -1), (4, -3), (-4, 3)] {
            let result = RootSetDescriptor::new(n, k);
            assert!(
                matches!(result, Err(Error::MalformedDescriptor { n: en, k: ek }) if en == n && ek == k),
                "({}, {}) should be rejected",
                n,
                k
            );
        }
    }

    #[test]
    fn test_constant_term() {
        let descriptor = RootSetDescriptor::new(4, 3).unwrap();
        let entries = root_entries(&[(1, 10, "4"), (2, 2, "111"), (3, 10, "12")]);

        let result = compute_constant_term(&descriptor, &entries).unwrap();
        assert_eq!(result, BigInt::from(-336));
    }

    #[test]
    fn test_truncation() {
        let descriptor = RootSetDescriptor::new(4, 3).unwrap();
        let entries = root_entries(&[(6, 4, "213"), (3, 10, "12"), (1, 10, "4"), (2, 2, "111")]);
        let assembler = Assembler::new(descriptor);

        let roots = assembler.select_roots(&entries).unwrap();
        let indices: Vec<_> = roots.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);

        let result = assembler.constant_term(&entries).unwrap();
        assert_eq!(result, BigInt::from(-336));

        // Extra in-range roots beyond k are dropped.
        let descriptor = RootSetDescriptor::new(5, 2).unwrap();
        let entries = root_entries(&[(5, 10, "100"), (4, 10, "4"), (2, 10, "3"), (1, 10, "2")]);
        let assembler = Assembler::new(descriptor);

        let roots = assembler.select_roots(&entries).unwrap();
        let indices: Vec<_> = roots.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![1, 2]);
        assert_eq!(assembler.constant_term(&entries).unwrap(), BigInt::from(6));
    }

    #[test]
    fn test_sparse_entries() {
        let descriptor = RootSetDescriptor::new(10, 2).unwrap();
        let entries = root_entries(&[(9, 10, "5"), (3, 10, "-2")]);

        let roots = Assembler::new(descriptor).select_roots(&entries).unwrap();
        let indices: Vec<_> = roots.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![3, 9]);

        let result = compute_constant_term(&descriptor, &entries).unwrap();
        assert_eq!(result, BigInt::from(-10));

        // Index zero is never in range.
        let descriptor = RootSetDescriptor::new(2, 2).unwrap();
        let entries = root_entries(&[(0, 10, "5"), (1, 10, "2")]);
        let result = compute_constant_term(&descriptor, &entries);
        assert!(matches!(
            result,
            Err(Error::InsufficientRoots {
                required: 2,
                available: 1
            })
        ));
    }

    #[test]
    fn test_huge_index_space() {
        let descriptor = RootSetDescriptor::new(i64::MAX, 2).unwrap();
        let entries = root_entries(&[(1, 10, "3"), (1 << 62, 10, "5")]);

        let result = compute_constant_term(&descriptor, &entries).unwrap();
        assert_eq!(result, BigInt::from(15));
    }

    #[test]
    fn test_insufficient_roots() {
        let descriptor = RootSetDescriptor::new(4, 3).unwrap();
        let entries = root_entries(&[(1, 10, "4"), (2, 2, "111"), (6, 4, "213")]);

        let result = compute_constant_term(&descriptor, &entries);
        assert!(matches!(
            result,
            Err(Error::InsufficientRoots {
                required: 3,
                available: 2
            })
        ));

        let result = compute_constant_term(&descriptor, &BTreeMap::new());
        assert!(matches!(
            result,
            Err(Error::InsufficientRoots {
                required: 3,
                available: 0
            })
        ));
    }

    #[test]
    fn test_invalid_root() {
        let descriptor = RootSetDescriptor::new(4, 2).unwrap();

        let entries = root_entries(&[(1, 10, "4"), (2, 10, "1A2")]);
        let result = compute_constant_term(&descriptor, &entries);
        match result {
            Err(Error::InvalidRoot { index, source }) => {
                assert_eq!(index, 2);
                assert_eq!(
                    source,
                    DecodeError::InvalidDigit {
                        digit: 'A',
                        position: 1,
                        base: 10
                    }
                );
            }
            other => panic!("unexpected result: {:?}", other),
        }

        // In-range roots past the first k are decoded as well.
        let entries = root_entries(&[(1, 10, "4"), (2, 10, "5"), (3, 40, "1")]);
        let result = compute_constant_term(&descriptor, &entries);
        assert!(matches!(
            result,
            Err(Error::InvalidRoot {
                index: 3,
                source: DecodeError::InvalidBase { base: 40 }
            })
        ));

        // Out-of-range roots are never decoded.
        let entries = root_entries(&[(1, 10, "4"), (2, 10, "5"), (7, 10, "")]);
        let result = compute_constant_term(&descriptor, &entries).unwrap();
        assert_eq!(result, BigInt::from(20));

        let entries = root_entries(&[(1, 10, ""), (2, 10, "5")]);
        let result = compute_constant_term(&descriptor, &entries);
        assert!(matches!(
            result,
            Err(Error::InvalidRoot {
                index: 1,
                source: DecodeError::EmptyValue
            })
        ));
        assert_eq!(result.unwrap_err().index(), Some(1));
    }

    #[test]
    fn test_map_key_is_index() {
        let descriptor = RootSetDescriptor::new(3, 2).unwrap();
        let mut entries = BTreeMap::new();
        entries.insert(1, RootEntry::new(7, 10, "2"));
        entries.insert(2, RootEntry::new(9, 10, "3"));

        let roots = Assembler::new(descriptor).select_roots(&entries).unwrap();
        let indices: Vec<_> = roots.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![1, 2]);

        entries.insert(2, RootEntry::new(9, 10, "x"));
        let result = compute_constant_term(&descriptor, &entries);
        assert_eq!(result.unwrap_err().index(), Some(2));
    }

    #[test]
    fn test_deterministic() {
        let descriptor = RootSetDescriptor::new(3, 3).unwrap();
        let entries = root_entries(&[(1, 16, "ffffffffffffffffffff"), (2, 8, "777"), (3, 36, "zz")]);
        let assembler = Assembler::new(descriptor);

        let first = assembler.constant_term(&entries).unwrap();
        for _ in 0..10 {
            assert_eq!(assembler.constant_term(&entries).unwrap(), first);
        }
    }
}
