//! Non-interactive commands: list, pick, reset

use rand::Rng;

use crate::error::ChishaError;
use crate::menu::MenuStore;

/// One line per item, `[x]` marking active ones
pub fn list_menu(menu: &MenuStore) -> String {
    let mut out = String::new();
    for item in menu.items() {
        let marker = if item.active { "[x]" } else { "[ ]" };
        out.push_str(&format!("{} {}\n", marker, item.name));
    }
    out
}

/// Uniformly random active dish
pub fn pick<R: Rng + ?Sized>(menu: &MenuStore, rng: &mut R) -> Result<String, ChishaError> {
    let active = menu.active_count();
    if active == 0 {
        return Err(ChishaError::NoActiveItems);
    }
    let index = rng.gen_range(0..active);
    menu.active_items()
        .nth(index)
        .map(|item| item.name.clone())
        .ok_or(ChishaError::NoActiveItems)
}

/// Restore the default menu; refused unless `confirmed`
pub fn reset(menu: &mut MenuStore, confirmed: bool) -> Result<(), ChishaError> {
    if menu.reset_to_default(confirmed) {
        Ok(())
    } else {
        Err(ChishaError::ResetNotConfirmed)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::menu::{DEFAULT_FOODS, MemoryStore, STORAGE_KEY};

    fn menu(json: &str) -> MenuStore {
        MenuStore::load(Box::new(MemoryStore::with_entry(STORAGE_KEY, json)))
    }

    #[test]
    fn test_list_marks_active_items() {
        let store = menu(
            r#"[{"id":"a","name":"火锅","active":true},{"id":"b","name":"烧烤","active":false}]"#,
        );
        assert_eq!(list_menu(&store), "[x] 火锅\n[ ] 烧烤\n");
    }

    #[test]
    fn test_list_empty_menu() {
        assert_eq!(list_menu(&menu("[]")), "");
    }

    #[test]
    fn test_pick_only_returns_active_items() {
        let store = menu(
            r#"[{"id":"a","name":"火锅","active":false},{"id":"b","name":"烧烤","active":true},{"id":"c","name":"饺子","active":true}]"#,
        );
        let mut rng = StdRng::seed_from_u64(1);
        let picked: HashSet<String> = (0..200).map(|_| pick(&store, &mut rng).unwrap()).collect();

        assert!(!picked.contains("火锅"));
        assert!(picked.contains("烧烤"));
        assert!(picked.contains("饺子"));
    }

    #[test]
    fn test_pick_without_active_items_fails() {
        let store = menu(r#"[{"id":"a","name":"火锅","active":false}]"#);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            pick(&store, &mut rng),
            Err(ChishaError::NoActiveItems)
        ));
    }

    #[test]
    fn test_reset_requires_confirmation() {
        let mut store = menu(r#"["火锅"]"#);

        assert!(matches!(
            reset(&mut store, false),
            Err(ChishaError::ResetNotConfirmed)
        ));
        assert_eq!(store.names(), vec!["火锅"]);

        reset(&mut store, true).unwrap();
        assert_eq!(store.len(), DEFAULT_FOODS.len());
    }
}
