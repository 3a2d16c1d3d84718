use std::collections::HashSet;
use std::fs;

use anyhow::{Context, Result, anyhow};
use fontdb::{Database, Family, Query, Source, Stretch, Style, Weight};

/// One font face loaded for preview rendering. `index` selects the face
/// inside collection files (.ttc); it is 0 for plain font files.
pub struct PreviewFace {
    pub data: Vec<u8>,
    pub index: u32,
}

/// The bold and italic faces of one family, ready to hand to the toolkit.
pub struct PreviewFaces {
    pub family: String,
    pub bold: PreviewFace,
    pub italic: PreviewFace,
}

/// System font database: family enumeration and preview face resolution.
pub struct FontCatalog {
    db: Database,
}

impl FontCatalog {
    /// Scan the host's font directories. Unreadable directories simply yield
    /// fewer faces, so this cannot fail outright.
    pub fn load_system() -> Self {
        let mut db = Database::new();
        db.load_system_fonts();
        Self { db }
    }

    #[cfg(test)]
    pub fn empty() -> Self {
        Self { db: Database::new() }
    }

    /// Distinct family names in the order the platform reports them. No
    /// sorting; the first face of a family decides its position.
    pub fn family_names(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut names = Vec::new();
        for face in self.db.faces() {
            if let Some((name, _)) = face.families.first() {
                if seen.insert(name.clone()) {
                    names.push(name.clone());
                }
            }
        }
        names
    }

    /// Resolve the closest bold and italic faces of `family` and load their
    /// data. Families without a true bold resolve to the nearest weight;
    /// italic accepts an oblique face as a stand-in.
    pub fn preview_faces(&self, family: &str) -> Result<PreviewFaces> {
        let bold = self.resolve(family, Weight::BOLD, Style::Normal)?;
        let italic = self.resolve(family, Weight::NORMAL, Style::Italic)?;
        Ok(PreviewFaces {
            family: family.to_string(),
            bold,
            italic,
        })
    }

    fn resolve(&self, family: &str, weight: Weight, style: Style) -> Result<PreviewFace> {
        let query = Query {
            families: &[Family::Name(family)],
            weight,
            style,
            stretch: Stretch::Normal,
        };
        let id = match self.db.query(&query) {
            Some(id) => id,
            None if style == Style::Italic => self
                .db
                .query(&Query {
                    style: Style::Oblique,
                    ..query
                })
                .ok_or_else(|| anyhow!("no italic or oblique face for '{family}'"))?,
            None => return Err(anyhow!("no face for '{family}' at weight {}", weight.0)),
        };
        self.load_face(id)
    }

    fn load_face(&self, id: fontdb::ID) -> Result<PreviewFace> {
        let (src, index) = self
            .db
            .face_source(id)
            .ok_or_else(|| anyhow!("face source missing for {id:?}"))?;
        let data = match src {
            Source::File(path) => fs::read(&path)
                .with_context(|| format!("reading font file {}", path.display()))?,
            Source::Binary(data) => data.as_ref().as_ref().to_vec(),
            Source::SharedFile(_, data) => data.as_ref().as_ref().to_vec(),
        };
        Ok(PreviewFace { data, index })
    }
}

/// The family names currently shown in the list widget.
///
/// Filtering narrows whatever is displayed right now; clearing the query is
/// the only way back to the full catalog. Entries are compared lower-cased
/// against the query exactly as typed.
pub struct FontList {
    visible: Vec<String>,
}

impl FontList {
    pub fn new(names: Vec<String>) -> Self {
        Self { visible: names }
    }

    /// Replace the displayed list with a fresh enumeration.
    pub fn reset(&mut self, names: Vec<String>) {
        self.visible = names;
    }

    /// Keep only the displayed entries containing `query`, preserving their
    /// relative order and original casing.
    pub fn apply_query(&mut self, query: &str) {
        self.visible.retain(|name| name.to_lowercase().contains(query));
    }

    pub fn visible(&self) -> &[String] {
        &self.visible
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_names() -> Vec<String> {
        vec![
            "Arial".to_string(),
            "Arial Black".to_string(),
            "Courier New".to_string(),
        ]
    }

    #[test]
    fn query_keeps_matches_in_order() {
        let mut list = FontList::new(sample_names());
        list.apply_query("arial");
        assert_eq!(list.visible(), ["Arial", "Arial Black"]);
    }

    #[test]
    fn reset_restores_the_full_catalog() {
        let mut list = FontList::new(sample_names());
        list.apply_query("arial");
        list.reset(sample_names());
        assert_eq!(list.visible(), ["Arial", "Arial Black", "Courier New"]);
    }

    #[test]
    fn every_survivor_contains_the_query() {
        let mut list = FontList::new(vec![
            "DejaVu Sans".to_string(),
            "DejaVu Serif".to_string(),
            "Liberation Mono".to_string(),
            "Noto Sans CJK".to_string(),
        ]);
        list.apply_query("sans");
        assert!(!list.is_empty());
        for name in list.visible() {
            assert!(name.to_lowercase().contains("sans"));
        }
    }

    #[test]
    fn narrowing_does_not_recover_on_a_broader_query() {
        // The filter runs over the displayed list, so widening the query
        // cannot bring entries back; only clearing can.
        let mut list = FontList::new(sample_names());
        list.apply_query("arial b");
        assert_eq!(list.visible(), ["Arial Black"]);
        list.apply_query("arial");
        assert_eq!(list.visible(), ["Arial Black"]);
    }

    #[test]
    fn uppercase_query_matches_nothing() {
        // Entries are lower-cased for the comparison, the query is not.
        let mut list = FontList::new(sample_names());
        list.apply_query("Arial");
        assert!(list.is_empty());
    }

    #[test]
    fn system_family_names_are_distinct_and_non_empty() {
        let catalog = FontCatalog::load_system();
        let names = catalog.family_names();
        // May be empty on minimal CI hosts with no fonts installed.
        println!("enumerated {} font families", names.len());
        let mut deduped = names.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), names.len());
        assert!(names.iter().all(|name| !name.is_empty()));
    }

    #[test]
    fn preview_faces_resolve_for_a_real_family() {
        let catalog = FontCatalog::load_system();
        let names = catalog.family_names();
        let Some(name) = names.first() else {
            println!("no system fonts available - skipping");
            return;
        };
        match catalog.preview_faces(name) {
            Ok(faces) => {
                assert_eq!(faces.family, *name);
                assert!(!faces.bold.data.is_empty());
                assert!(!faces.italic.data.is_empty());
            }
            // A family with a single normal face and no oblique is legal.
            Err(err) => println!("could not resolve faces for {name}: {err:#}"),
        }
    }
}
