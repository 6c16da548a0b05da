//! Perfume creator: compose a custom blend from up to five notes.
//!
//! The season, mood, price and name of a blend are all derived from the
//! selected notes; nothing is stored until the caller saves the resulting
//! [`Creation`].

use chrono::{DateTime, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, instrument};

use maison_bonheur_core::{Price, ProductId};

use crate::models::{CREATION_IMAGE, Creation, Mood, Note, NoteFamily, Season};

/// Maximum number of notes in one blend.
pub const MAX_NOTES: usize = 5;

/// Price of the base before any note is added.
const BASE_PRICE: u32 = 80;

/// Price charged for a note without its own price.
const DEFAULT_NOTE_PRICE: u32 = 15;

/// Errors from composing a creation.
#[derive(Debug, Error)]
pub enum CreatorError {
    #[error("select at least one note")]
    NoNotesSelected,
}

/// Result of [`Composer::toggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// The note was not added because the blend is full.
    LimitReached,
}

/// The notes offered by the creator.
#[must_use]
pub fn note_palette() -> Vec<Note> {
    [
        ("1", "Rose", NoteFamily::Floral, 8, "Note florale délicate", 18),
        ("2", "Jasmin", NoteFamily::Floral, 7, "Note florale envoûtante", 20),
        ("3", "Santal", NoteFamily::Woody, 9, "Note boisée chaude", 25),
        ("4", "Cèdre", NoteFamily::Woody, 6, "Note boisée noble", 22),
        ("5", "Bergamote", NoteFamily::Fruity, 5, "Note fraîche et acidulée", 15),
        ("6", "Vanille", NoteFamily::Gourmand, 7, "Note gourmande et douce", 22),
        ("7", "Citron", NoteFamily::Fresh, 4, "Note fraîche et énergisante", 14),
        ("8", "Ambre", NoteFamily::Oriental, 9, "Note orientale sensuelle", 28),
        ("9", "Lavande", NoteFamily::Fresh, 5, "Note herbacée apaisante", 12),
        ("10", "Musc", NoteFamily::Oriental, 6, "Note animale enveloppante", 24),
    ]
    .into_iter()
    .map(|(id, name, family, intensity, description, price)| Note {
        id: id.to_owned(),
        name: name.to_owned(),
        family,
        intensity,
        description: description.to_owned(),
        price: Some(Price::from_units(price)),
    })
    .collect()
}

/// Notes of one family, or all notes when no family is given.
#[must_use]
pub fn filter_by_family(notes: &[Note], family: Option<NoteFamily>) -> Vec<&Note> {
    notes
        .iter()
        .filter(|note| family.is_none_or(|family| note.family == family))
        .collect()
}

/// Notes selected so far and everything derived from them.
#[derive(Debug, Clone, Default)]
pub struct Composer {
    selected: Vec<Note>,
}

impl Composer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected notes, in selection order.
    #[must_use]
    pub fn selected(&self) -> &[Note] {
        &self.selected
    }

    #[must_use]
    pub fn is_selected(&self, note_id: &str) -> bool {
        self.selected.iter().any(|note| note.id == note_id)
    }

    /// Remove the note if selected, otherwise add it when there is room.
    #[instrument(skip(self, note), fields(note = %note.name))]
    pub fn toggle(&mut self, note: &Note) -> ToggleOutcome {
        if self.is_selected(&note.id) {
            self.selected.retain(|selected| selected.id != note.id);
            return ToggleOutcome::Removed;
        }
        if self.selected.len() >= MAX_NOTES {
            debug!(max = MAX_NOTES, "Blend is full");
            return ToggleOutcome::LimitReached;
        }
        self.selected.push(note.clone());
        ToggleOutcome::Added
    }

    pub fn reset(&mut self) {
        self.selected.clear();
    }

    fn count_of(&self, family: NoteFamily) -> usize {
        self.selected
            .iter()
            .filter(|note| note.family == family)
            .count()
    }

    fn intensity_sum(&self) -> u32 {
        self.selected
            .iter()
            .map(|note| u32::from(note.intensity))
            .sum()
    }

    fn note_count(&self) -> u32 {
        u32::try_from(self.selected.len()).unwrap_or(u32::MAX)
    }

    /// Mean intensity of the selected notes, 0 when none are selected.
    #[must_use]
    pub fn average_intensity(&self) -> f64 {
        if self.selected.is_empty() {
            return 0.0;
        }
        f64::from(self.intensity_sum()) / f64::from(self.note_count())
    }

    /// Mean intensity rounded half up.
    #[must_use]
    pub fn rounded_intensity(&self) -> u8 {
        let count = self.note_count();
        if count == 0 {
            return 0;
        }
        let rounded = (2 * self.intensity_sum() + count) / (2 * count);
        u8::try_from(rounded).unwrap_or(u8::MAX)
    }

    /// Season suggested by the mix of families.
    #[must_use]
    pub fn season(&self) -> Option<Season> {
        if self.selected.is_empty() {
            return None;
        }
        let has = |family| self.count_of(family) > 0;
        let floral = has(NoteFamily::Floral);
        let fresh = has(NoteFamily::Fresh);
        let woody = has(NoteFamily::Woody);

        let season = if floral && fresh {
            Season::Spring
        } else if fresh && has(NoteFamily::Fruity) {
            Season::Summer
        } else if woody && has(NoteFamily::Oriental) {
            Season::Autumn
        } else if woody && has(NoteFamily::Gourmand) {
            Season::Winter
        } else if floral {
            Season::Spring
        } else if fresh {
            Season::Summer
        } else if woody {
            Season::Autumn
        } else {
            Season::AllSeasons
        };
        Some(season)
    }

    /// Mood derived from the average intensity.
    #[must_use]
    pub fn mood(&self) -> Option<Mood> {
        let count = self.note_count();
        if count == 0 {
            return None;
        }
        let sum = self.intensity_sum();
        let mood = if sum >= 8 * count {
            Mood::Intense
        } else if sum >= 6 * count {
            Mood::Elegant
        } else if sum >= 4 * count {
            Mood::Romantic
        } else {
            Mood::Light
        };
        Some(mood)
    }

    /// Base price plus note prices, raised by 20% for intense blends and
    /// rounded to whole units.
    #[must_use]
    pub fn price(&self) -> Price {
        let notes: Price = self
            .selected
            .iter()
            .map(|note| note.price.unwrap_or(Price::from_units(DEFAULT_NOTE_PRICE)))
            .sum();
        let subtotal = Price::from_units(BASE_PRICE) + notes;

        let count = self.note_count();
        let intense = count > 0 && self.intensity_sum() > 7 * count;
        let factor = if intense { Decimal::new(12, 1) } else { Decimal::ONE };

        subtotal.scale(factor).round_units()
    }

    /// Sentence describing the blend.
    #[must_use]
    pub fn description(&self) -> String {
        let (Some(season), Some(mood)) = (self.season(), self.mood()) else {
            return "Votre création personnalisée".to_owned();
        };
        let notes = self
            .selected
            .iter()
            .map(|note| note.name.to_lowercase())
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "Une fragrance {} aux notes de {notes}. Parfait pour la saison {}.",
            mood.label().to_lowercase(),
            season.label().to_lowercase()
        )
    }

    /// Every name the blend could be given.
    #[must_use]
    pub fn name_candidates(&self) -> Vec<String> {
        let (Some(main), Some(season), Some(mood)) =
            (self.selected.first(), self.season(), self.mood())
        else {
            return vec!["Parfum Unique".to_owned()];
        };
        let note = &main.name;
        let mood = mood.keyword();
        vec![
            format!("Élixir {note}"),
            format!("Essence {mood}"),
            format!("Parfum {note} {mood}"),
            format!("Création {season}"),
            format!("Sérum {note}"),
            format!("Fragrance {mood}"),
            format!("Nectar {note}"),
            format!("Extrait {season}"),
        ]
    }

    /// Build a creation from the current selection.
    ///
    /// # Errors
    ///
    /// Returns `CreatorError::NoNotesSelected` if nothing is selected.
    #[instrument(skip(self, rng), fields(notes = self.selected.len()))]
    pub fn compose<R: Rng + ?Sized>(
        &self,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<Creation, CreatorError> {
        let (Some(season), Some(mood)) = (self.season(), self.mood()) else {
            return Err(CreatorError::NoNotesSelected);
        };

        let mut names = self.name_candidates();
        let name = names.swap_remove(rng.random_range(0..names.len()));

        let mut families = Vec::new();
        for note in &self.selected {
            if !families.contains(&note.family) {
                families.push(note.family);
            }
        }

        Ok(Creation {
            id: ProductId::new(now.timestamp_millis().to_string()),
            created_at: now,
            notes: self.selected.iter().map(|note| note.name.clone()).collect(),
            families,
            intensity: self.rounded_intensity(),
            season,
            mood,
            name,
            price: self.price(),
            image_url: CREATION_IMAGE.to_owned(),
            description: self.description(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn note(name: &str) -> Note {
        note_palette()
            .into_iter()
            .find(|note| note.name == name)
            .unwrap()
    }

    fn compose_with(names: &[&str]) -> Composer {
        let mut composer = Composer::new();
        for name in names {
            assert_eq!(composer.toggle(&note(name)), ToggleOutcome::Added);
        }
        composer
    }

    #[test]
    fn test_palette() {
        let palette = note_palette();
        assert_eq!(palette.len(), 10);
        assert_eq!(filter_by_family(&palette, Some(NoteFamily::Fresh)).len(), 2);
        assert_eq!(filter_by_family(&palette, Some(NoteFamily::Gourmand)).len(), 1);
        assert_eq!(filter_by_family(&palette, None).len(), 10);
    }

    #[test]
    fn test_toggle_limit() {
        let mut composer = compose_with(&["Rose", "Jasmin", "Santal", "Cèdre", "Musc"]);
        assert_eq!(composer.toggle(&note("Ambre")), ToggleOutcome::LimitReached);
        assert_eq!(composer.selected().len(), MAX_NOTES);

        assert_eq!(composer.toggle(&note("Rose")), ToggleOutcome::Removed);
        assert!(!composer.is_selected("1"));
        assert_eq!(composer.toggle(&note("Ambre")), ToggleOutcome::Added);

        composer.reset();
        assert!(composer.selected().is_empty());
    }

    #[test]
    fn test_empty_selection() {
        let composer = Composer::new();
        assert_eq!(composer.season(), None);
        assert_eq!(composer.mood(), None);
        assert_eq!(composer.price(), Price::from_units(80));
        assert_eq!(composer.description(), "Votre création personnalisée");

        let mut rng = StdRng::seed_from_u64(7);
        assert!(matches!(
            composer.compose(Utc::now(), &mut rng),
            Err(CreatorError::NoNotesSelected)
        ));
    }

    #[test]
    fn test_season_rules() {
        assert_eq!(compose_with(&["Rose", "Citron"]).season(), Some(Season::Spring));
        assert_eq!(compose_with(&["Citron", "Bergamote"]).season(), Some(Season::Summer));
        assert_eq!(compose_with(&["Santal", "Ambre"]).season(), Some(Season::Autumn));
        assert_eq!(compose_with(&["Cèdre", "Vanille"]).season(), Some(Season::Winter));
        assert_eq!(compose_with(&["Jasmin", "Musc"]).season(), Some(Season::Spring));
        assert_eq!(compose_with(&["Lavande"]).season(), Some(Season::Summer));
        assert_eq!(compose_with(&["Santal"]).season(), Some(Season::Autumn));
        assert_eq!(compose_with(&["Vanille", "Musc"]).season(), Some(Season::AllSeasons));
    }

    #[test]
    fn test_mood_thresholds() {
        assert_eq!(compose_with(&["Santal", "Ambre"]).mood(), Some(Mood::Intense));
        assert_eq!(compose_with(&["Cèdre", "Jasmin"]).mood(), Some(Mood::Elegant));
        assert_eq!(compose_with(&["Citron", "Lavande"]).mood(), Some(Mood::Romantic));
        // Average 5.5 rounds to 6 but the mood uses the exact average.
        assert_eq!(compose_with(&["Bergamote", "Musc"]).mood(), Some(Mood::Romantic));
        assert_eq!(compose_with(&["Bergamote", "Musc"]).rounded_intensity(), 6);
    }

    #[test]
    fn test_price() {
        // 80 + 18 + 14 = 112, average intensity 6.
        assert_eq!(compose_with(&["Rose", "Citron"]).price(), Price::from_units(112));
        // (80 + 25 + 28) * 1.2 = 159.6, average intensity 9.
        assert_eq!(compose_with(&["Santal", "Ambre"]).price(), Price::from_units(160));

        let mut composer = Composer::new();
        let mut unpriced = note("Citron");
        unpriced.price = None;
        composer.toggle(&unpriced);
        assert_eq!(composer.price(), Price::from_units(95));
    }

    #[test]
    fn test_compose() {
        let composer = compose_with(&["Rose", "Jasmin", "Lavande"]);
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(42);
        let creation = composer.compose(now, &mut rng).unwrap();

        assert_eq!(creation.notes, vec!["Rose", "Jasmin", "Lavande"]);
        assert_eq!(creation.families, vec![NoteFamily::Floral, NoteFamily::Fresh]);
        assert_eq!(creation.season, Season::Spring);
        assert_eq!(creation.mood, Mood::Elegant);
        assert_eq!(creation.intensity, 7);
        assert_eq!(creation.price, Price::from_units(130));
        assert_eq!(creation.id.as_str(), now.timestamp_millis().to_string());
        assert!(composer.name_candidates().contains(&creation.name));
        assert_eq!(
            creation.description,
            "Une fragrance élégant & sophistiqué aux notes de rose, jasmin, lavande. \
             Parfait pour la saison printemps."
        );
    }

    #[test]
    fn test_creation_to_cart_item() {
        let composer = compose_with(&["Ambre", "Vanille"]);
        let mut rng = StdRng::seed_from_u64(1);
        let creation = composer.compose(Utc::now(), &mut rng).unwrap();

        let item = creation.to_cart_item();
        assert_eq!(item.quantity, 1);
        assert_eq!(item.price, creation.price);
        assert_eq!(item.image_url, CREATION_IMAGE);
        let details = item.custom.unwrap();
        assert_eq!(details.notes, vec!["Ambre", "Vanille"]);
        assert_eq!(details.season, "Toutes saisons");
        assert_eq!(details.mood, "Intense & Sensuel");
    }
}
