//! In-memory country registry.

use std::collections::HashMap;
use std::sync::RwLock;

use gazetteer_core::{Country, DomainResult};

/// In-memory store of country records, keyed by code.
///
/// A single reader/writer lock guards the map: reads run concurrently,
/// writes are exclusive. Every operation returns copies rather than
/// references into the map, so callers cannot mutate stored state behind
/// the lock's back.
#[derive(Debug, Default)]
pub struct CountryStore {
    inner: RwLock<HashMap<String, Country>>,
}

impl CountryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the record for `code`, if present.
    pub fn get(&self, code: &str) -> Option<Country> {
        let map = self.inner.read().ok()?;
        map.get(code).cloned()
    }

    /// Returns a copy of every record. Order is map iteration order.
    pub fn list(&self) -> Vec<Country> {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(_) => return vec![],
        };
        map.values().cloned().collect()
    }

    /// Validates the record, then inserts or overwrites it keyed by its code.
    ///
    /// A rejected record leaves the map untouched. Returns the stored copy.
    pub fn put(&self, country: Country) -> DomainResult<Country> {
        country.validate()?;
        if let Ok(mut map) = self.inner.write() {
            map.insert(country.code.clone(), country.clone());
        }
        Ok(country)
    }

    /// Removes the record for `code`. Removing an absent code is a no-op.
    pub fn delete(&self, code: &str) {
        if let Ok(mut map) = self.inner.write() {
            map.remove(code);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use gazetteer_core::DomainError;

    fn finland() -> Country {
        Country::new("fi", "Finland")
    }

    #[test]
    fn put_then_get_returns_an_equivalent_record() {
        let store = CountryStore::new();
        store.put(finland()).unwrap();

        assert_eq!(store.get("fi"), Some(finland()));
    }

    #[test]
    fn get_of_absent_code_returns_none() {
        let store = CountryStore::new();
        assert_eq!(store.get("xx"), None);
    }

    #[test]
    fn put_overwrites_record_with_the_same_code() {
        let store = CountryStore::new();
        store.put(finland()).unwrap();
        store.put(Country::new("fi", "Republic of Finland")).unwrap();

        assert_eq!(store.get("fi").unwrap().name, "Republic of Finland");
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn put_rejects_empty_code_without_mutating() {
        let store = CountryStore::new();
        let err = store.put(Country::new("", "Finland")).unwrap_err();

        match err {
            DomainError::Validation(msg) => assert_eq!(msg, "country code required"),
            _ => panic!("expected Validation error for empty code"),
        }
        assert!(store.list().is_empty());
    }

    #[test]
    fn put_rejects_empty_name_without_mutating() {
        let store = CountryStore::new();
        let err = store.put(Country::new("fi", "")).unwrap_err();

        match err {
            DomainError::Validation(msg) => assert_eq!(msg, "country name required"),
            _ => panic!("expected Validation error for empty name"),
        }
        assert!(store.list().is_empty());
    }

    #[test]
    fn list_returns_every_record_regardless_of_order() {
        let store = CountryStore::new();
        store.put(finland()).unwrap();
        store.put(Country::new("se", "Sweden")).unwrap();
        store.put(Country::new("no", "Norway")).unwrap();

        let mut codes: Vec<String> = store.list().into_iter().map(|c| c.code).collect();
        codes.sort();
        assert_eq!(codes, vec!["fi", "no", "se"]);
    }

    #[test]
    fn delete_removes_the_record() {
        let store = CountryStore::new();
        store.put(finland()).unwrap();

        store.delete("fi");
        assert_eq!(store.get("fi"), None);
    }

    #[test]
    fn delete_of_an_absent_code_is_a_no_op() {
        let store = CountryStore::new();
        store.put(finland()).unwrap();

        store.delete("xx");
        store.delete("xx");
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn mutating_a_returned_copy_does_not_affect_the_store() {
        let store = CountryStore::new();
        store.put(finland()).unwrap();

        let mut copy = store.get("fi").unwrap();
        copy.name = "Mutated".to_string();

        assert_eq!(store.get("fi").unwrap().name, "Finland");
    }

    #[test]
    fn concurrent_puts_to_distinct_codes_all_land() {
        let store = Arc::new(CountryStore::new());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || {
                    store
                        .put(Country::new(format!("c{i}"), format!("Country {i}")))
                        .unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.list().len(), 16);
    }

    #[test]
    fn concurrent_reads_never_observe_a_partial_record() {
        // Writers alternate two complete records under one code; any read
        // must see one of them in full, never a code/name mix.
        let store = Arc::new(CountryStore::new());
        let first = Country::new("fi", "Finland");
        let second = Country::new("fi", "Suomi");
        store.put(first.clone()).unwrap();

        let writer = {
            let store = store.clone();
            let (first, second) = (first.clone(), second.clone());
            std::thread::spawn(move || {
                for i in 0..500 {
                    let record = if i % 2 == 0 { second.clone() } else { first.clone() };
                    store.put(record).unwrap();
                }
            })
        };

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let store = store.clone();
                let (first, second) = (first.clone(), second.clone());
                std::thread::spawn(move || {
                    for _ in 0..500 {
                        let seen = store.get("fi").unwrap();
                        assert!(seen == first || seen == second, "partial record: {seen:?}");
                    }
                })
            })
            .collect();

        writer.join().unwrap();
        for reader in readers {
            reader.join().unwrap();
        }
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: every record with non-empty code and name survives a
            /// put + get round trip unchanged.
            #[test]
            fn valid_records_round_trip(code in ".{1,12}", name in ".{1,40}") {
                let store = CountryStore::new();
                let stored = store.put(Country::new(code.clone(), name.clone())).unwrap();

                prop_assert_eq!(stored, Country::new(code.clone(), name));
                prop_assert_eq!(store.get(&code).unwrap().code, code);
            }

            /// Property: an empty code is always rejected and never inserts.
            #[test]
            fn empty_code_never_inserts(name in ".{0,40}") {
                let store = CountryStore::new();

                prop_assert!(store.put(Country::new("", name)).is_err());
                prop_assert!(store.list().is_empty());
            }
        }
    }
}
