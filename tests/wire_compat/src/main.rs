fn main() {
    println!("Run `cargo test -p wire-compat` to execute wire compatibility tests.");
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use favdir_protocol::{FavoriteEntry, FavoritesDocument, FavoritesResponse};

    /// Returns the path to the fixtures directory.
    fn fixtures_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
    }

    /// Loads a fixture JSON file and returns it as a `serde_json::Value`.
    fn load_fixture(name: &str) -> serde_json::Value {
        let path = fixtures_dir().join(name);
        let data = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()));
        serde_json::from_str(&data)
            .unwrap_or_else(|e| panic!("failed to parse fixture {}: {e}", path.display()))
    }

    /// Deserializes a fixture, re-serializes it, and compares the JSON values.
    fn roundtrip_test<T>(name: &str) -> T
    where
        T: serde::de::DeserializeOwned + serde::Serialize,
    {
        let fixture = load_fixture(name);
        let parsed: T = serde_json::from_value(fixture.clone())
            .unwrap_or_else(|e| panic!("failed to deserialize {name}: {e}"));
        let reserialized = serde_json::to_value(&parsed)
            .unwrap_or_else(|e| panic!("failed to re-serialize {name}: {e}"));

        assert_eq!(
            fixture, reserialized,
            "roundtrip mismatch for {name}:\n  fixture: {fixture}\n  rust:    {reserialized}"
        );
        parsed
    }

    #[test]
    fn frontend_written_settings_survive() {
        let doc = roundtrip_test::<FavoritesDocument>("settings_frontend.json");

        assert_eq!(doc.favorites.len(), 2);
        assert_eq!(doc.favorites[0].path, "projects/thesis");
        assert!(doc.favorites[0].title.is_none());
        assert_eq!(doc.favorites[1].extra["default"], true);
        assert_eq!(doc.extra["showWidget"], true);
    }

    #[test]
    fn seeded_settings_parse() {
        let doc = roundtrip_test::<FavoritesDocument>("settings_seeded.json");

        assert_eq!(
            doc.favorites,
            vec![
                FavoriteEntry::home("/global/homes/a/alice"),
                FavoriteEntry::scratch("/pscratch/sd/a/alice"),
            ]
        );
    }

    #[test]
    fn response_shape() {
        let resp = roundtrip_test::<FavoritesResponse>("favorites_response.json");

        assert_eq!(resp.defaults.len(), 1);
        assert_eq!(resp.valid[0].title.as_deref(), Some("data"));
        assert!(resp.valid[0].icon_class.is_none());
        assert_eq!(resp.invalid[0].icon_class.as_deref(), Some("jp-FolderIcon"));
    }

    #[test]
    fn response_without_groups_drops_keys() {
        let mut fixture = load_fixture("favorites_response.json");
        let obj = fixture.as_object_mut().unwrap();
        obj.remove("valid");
        obj.remove("invalid");

        let resp: FavoritesResponse = serde_json::from_value(fixture.clone()).unwrap();
        assert!(resp.valid.is_empty());
        assert_eq!(serde_json::to_value(&resp).unwrap(), fixture);
    }
}
