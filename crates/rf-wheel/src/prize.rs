//! Prize table — one prize per wheel segment, same indexing as the layout

use serde::{Deserialize, Serialize};

use crate::error::{WheelError, WheelResult};
use crate::layout::SegmentLayout;

/// A single prize on the wheel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prize {
    /// Label shown to the player
    pub label: String,
    /// Segment fill color (`#RRGGBB`)
    pub color: String,
}

impl Prize {
    /// Create a prize from a label and a `#RRGGBB` color.
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
        }
    }
}

/// Ordered list of prizes
///
/// Decodes from a plain JSON/YAML list. Emptiness is checked by
/// [`PrizeTable::new`] and by [`WheelConfig::validate`](crate::config::WheelConfig::validate),
/// so a decoded empty list surfaces as `InvalidConfiguration`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrizeTable {
    prizes: Vec<Prize>,
}

impl PrizeTable {
    /// Create a table; a wheel needs at least one prize.
    pub fn new(prizes: Vec<Prize>) -> WheelResult<Self> {
        if prizes.is_empty() {
            return Err(WheelError::invalid("prize table is empty"));
        }
        Ok(Self { prizes })
    }

    /// Number of prizes, which is the wheel's segment count
    pub fn len(&self) -> usize {
        self.prizes.len()
    }

    /// True only for a decoded table that has not been validated
    pub fn is_empty(&self) -> bool {
        self.prizes.is_empty()
    }

    /// Prize for a resolved segment index
    pub fn get(&self, index: usize) -> Option<&Prize> {
        self.prizes.get(index)
    }

    /// All prizes in segment order
    pub fn iter(&self) -> impl Iterator<Item = &Prize> {
        self.prizes.iter()
    }

    /// Segment layout matching this table
    pub fn layout(&self) -> WheelResult<SegmentLayout> {
        SegmentLayout::new(self.len())
    }
}

impl Default for PrizeTable {
    fn default() -> Self {
        Self {
            prizes: vec![
                Prize::new("Descuento 10%", "#EF4444"),
                Prize::new("Ebook Gratis", "#3B82F6"),
                Prize::new("Voucher $500", "#10B981"),
                Prize::new("Consultoría", "#F59E0B"),
                Prize::new("Intenta de nuevo", "#6B7280"),
                Prize::new("Sorpresa", "#8B5CF6"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let table = PrizeTable::default();
        assert_eq!(table.len(), 6);
        assert_eq!(table.get(0).unwrap().label, "Descuento 10%");
        assert_eq!(table.get(5).unwrap().color, "#8B5CF6");
        assert!(table.get(6).is_none());
        assert_eq!(table.layout().unwrap().segment_angle(), 60.0);
    }

    #[test]
    fn test_empty_table_rejected() {
        assert!(PrizeTable::new(Vec::new()).unwrap_err().is_invalid_configuration());

        // decoding accepts the list, the layout refuses it
        let decoded: PrizeTable = serde_json::from_str("[]").unwrap();
        assert!(decoded.is_empty());
        assert!(decoded.layout().unwrap_err().is_invalid_configuration());
    }

    #[test]
    fn test_table_from_json() {
        let json = r##"[{"label":"Mug","color":"#000000"},{"label":"Pen","color":"#FFFFFF"}]"##;
        let table: PrizeTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(1).unwrap().label, "Pen");
    }
}
