//! Container weighment reconciliation.
//!
//! Four measurements, two of them derived: `actual = physical - tare`
//! is never edited directly, and `shortage = actual - gross` only
//! exists once the documented gross weight is known and non-zero.

use crate::model::Container;

pub fn actual_weight(physical: f64, tare: f64) -> f64 {
    physical - tare
}

/// `actual - gross`; positive means the container weighed more than
/// the shipping documents claim. `None` while gross is missing/zero.
pub fn weight_shortage(actual: f64, gross: f64) -> Option<f64> {
    if gross == 0.0 {
        None
    } else {
        Some(actual - gross)
    }
}

/// Display form: two decimals, explicit sign on positive values.
pub fn format_shortage(shortage: f64) -> String {
    format!("{:+.2}", shortage)
}

/// A single edit from the operations weighment screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeightEdit {
    Physical(f64),
    Tare(f64),
    Gross(f64),
}

/// Applies one weighment edit and recomputes the dependent fields.
/// Editing the gross weight leaves `actual_weight` untouched.
pub fn apply_edit(container: &mut Container, edit: WeightEdit) {
    match edit {
        WeightEdit::Physical(value) => {
            container.physical_weight = value;
            container.actual_weight =
                actual_weight(container.physical_weight, container.tare_weight);
        }
        WeightEdit::Tare(value) => {
            container.tare_weight = value;
            container.actual_weight =
                actual_weight(container.physical_weight, container.tare_weight);
        }
        WeightEdit::Gross(value) => {
            container.container_gross_weight = value;
        }
    }
    container.weight_shortage =
        weight_shortage(container.actual_weight, container.container_gross_weight);
}

/// Full recompute of the derived weight fields, used by the job-level
/// deriver. Same arithmetic as replaying every edit.
pub(crate) fn recompute(container: &mut Container) {
    container.actual_weight = actual_weight(container.physical_weight, container.tare_weight);
    container.weight_shortage =
        weight_shortage(container.actual_weight, container.container_gross_weight);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortage_sign_follows_actual_minus_gross() {
        assert_eq!(weight_shortage(1000.0, 950.0), Some(50.0));
        assert_eq!(weight_shortage(900.0, 950.0), Some(-50.0));
    }

    #[test]
    fn test_shortage_none_without_gross() {
        assert_eq!(weight_shortage(1000.0, 0.0), None);
    }

    #[test]
    fn test_format_shortage_signs() {
        assert_eq!(format_shortage(50.0), "+50.00");
        assert_eq!(format_shortage(-50.0), "-50.00");
        assert_eq!(format_shortage(12.345), "+12.35");
    }

    #[test]
    fn test_physical_edit_recomputes_actual_then_shortage() {
        let mut c = Container::new("A", "40");
        c.tare_weight = 3750.0;
        c.container_gross_weight = 22000.0;

        apply_edit(&mut c, WeightEdit::Physical(26000.0));
        assert_eq!(c.actual_weight, 22250.0);
        assert_eq!(c.weight_shortage, Some(250.0));
    }

    #[test]
    fn test_tare_edit_recomputes_actual_then_shortage() {
        let mut c = Container::new("A", "40");
        c.physical_weight = 26000.0;
        c.container_gross_weight = 22000.0;

        apply_edit(&mut c, WeightEdit::Tare(4200.0));
        assert_eq!(c.actual_weight, 21800.0);
        assert_eq!(c.weight_shortage, Some(-200.0));
    }

    #[test]
    fn test_gross_edit_leaves_actual_untouched() {
        let mut c = Container::new("A", "40");
        apply_edit(&mut c, WeightEdit::Physical(26000.0));
        apply_edit(&mut c, WeightEdit::Tare(3750.0));
        let actual_before = c.actual_weight;

        apply_edit(&mut c, WeightEdit::Gross(22000.0));
        assert_eq!(c.actual_weight, actual_before);
        assert_eq!(c.weight_shortage, Some(250.0));
    }

    #[test]
    fn test_recompute_matches_edit_replay() {
        let mut edited = Container::new("A", "40");
        apply_edit(&mut edited, WeightEdit::Physical(26000.0));
        apply_edit(&mut edited, WeightEdit::Tare(3750.0));
        apply_edit(&mut edited, WeightEdit::Gross(22000.0));

        let mut raw = Container::new("A", "40");
        raw.physical_weight = 26000.0;
        raw.tare_weight = 3750.0;
        raw.container_gross_weight = 22000.0;
        recompute(&mut raw);

        assert_eq!(raw.actual_weight, edited.actual_weight);
        assert_eq!(raw.weight_shortage, edited.weight_shortage);
    }
}
