use crate::error::SimulationError;
use crate::storage::{KeyValueStore, TWIN_ID_KEY, USER_ID_KEY};

/// Identifiers of the logged-in user and their digital twin. Set by the
/// login and twin-creation flows; read here only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub user_id: i64,
    pub twin_id: i64,
}

impl Session {
    pub fn new(user_id: i64, twin_id: i64) -> Self {
        Self { user_id, twin_id }
    }

    /// Reads both identifiers. Either one missing, blank, or non-numeric
    /// aborts with a precondition error.
    pub fn load(store: &impl KeyValueStore) -> Result<Self, SimulationError> {
        let user_id = read_id(store, USER_ID_KEY)?;
        let twin_id = read_id(store, TWIN_ID_KEY)?;
        Ok(Self { user_id, twin_id })
    }
}

fn read_id(store: &impl KeyValueStore, key: &'static str) -> Result<i64, SimulationError> {
    let raw = store
        .get_item(key)
        .filter(|v| !v.trim().is_empty())
        .ok_or(SimulationError::MissingSession { key })?;

    raw.trim()
        .parse::<i64>()
        .map_err(|_| SimulationError::InvalidSession { key, value: raw.clone() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_load_reads_both_ids() {
        let store = MemoryStore::new()
            .with(USER_ID_KEY, "12")
            .with(TWIN_ID_KEY, " 3 ");
        assert_eq!(Session::load(&store), Ok(Session::new(12, 3)));
    }

    #[test]
    fn test_missing_twin_id() {
        let store = MemoryStore::new().with(USER_ID_KEY, "12");
        assert_eq!(
            Session::load(&store),
            Err(SimulationError::MissingSession { key: TWIN_ID_KEY })
        );
    }

    #[test]
    fn test_empty_value_counts_as_missing() {
        let store = MemoryStore::new()
            .with(USER_ID_KEY, "")
            .with(TWIN_ID_KEY, "3");
        assert_eq!(
            Session::load(&store),
            Err(SimulationError::MissingSession { key: USER_ID_KEY })
        );
    }

    #[test]
    fn test_non_numeric_id_rejected() {
        let store = MemoryStore::new()
            .with(USER_ID_KEY, "abc")
            .with(TWIN_ID_KEY, "3");
        match Session::load(&store) {
            Err(SimulationError::InvalidSession { key, value }) => {
                assert_eq!(key, USER_ID_KEY);
                assert_eq!(value, "abc");
            }
            other => panic!("Expected InvalidSession, got {:?}", other),
        }
    }
}
