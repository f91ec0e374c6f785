//! Product creation form.

use stockroom_core::ProductId;
use stockroom_products::NewProduct;

/// Raw text of the creation form inputs.
///
/// Nothing is validated here: name and sku are only trimmed, and numbers that
/// do not parse are sent as `null` for the backend to reject.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreationForm {
    pub name: String,
    pub sku: String,
    pub price: String,
    pub quantity: String,
    pub min_stock: String,
}

impl CreationForm {
    /// Build the creation payload for `id`.
    pub fn to_new_product(&self, id: ProductId) -> NewProduct {
        NewProduct {
            id,
            name: self.name.trim().to_string(),
            sku: self.sku.trim().to_string(),
            price: parse_decimal(&self.price),
            quantity: parse_integer(&self.quantity),
            min_stock: parse_integer(&self.min_stock),
        }
    }

    /// Clear every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

fn parse_decimal(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

// Optional sign, then the leading digits: "3.9" is 3, "1e3" is 1. No digits,
// or a value outside i64, gives `None`.
fn parse_integer(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let unsigned = raw.trim_start_matches(['+', '-']);
    let sign_len = raw.len() - unsigned.len();
    if sign_len > 1 {
        return None;
    }

    let digits = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits == 0 {
        return None;
    }
    raw[..sign_len + digits].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> CreationForm {
        CreationForm {
            name: "  Widget ".to_string(),
            sku: "W1 ".to_string(),
            price: "10.5".to_string(),
            quantity: "3".to_string(),
            min_stock: "5".to_string(),
        }
    }

    #[test]
    fn builds_trimmed_payload() {
        let id = ProductId::new();
        let payload = filled().to_new_product(id.clone());

        assert_eq!(payload.id, id);
        assert_eq!(payload.name, "Widget");
        assert_eq!(payload.sku, "W1");
        assert_eq!(payload.price, Some(10.5));
        assert_eq!(payload.quantity, Some(3));
        assert_eq!(payload.min_stock, Some(5));
    }

    #[test]
    fn unparseable_numbers_become_none() {
        let form = CreationForm {
            price: "ten".to_string(),
            quantity: String::new(),
            min_stock: "inf".to_string(),
            ..filled()
        };
        let payload = form.to_new_product(ProductId::new());

        assert_eq!(payload.price, None);
        assert_eq!(payload.quantity, None);
        assert_eq!(payload.min_stock, None);
    }

    #[test]
    fn does_not_validate_ranges() {
        let form = CreationForm {
            name: "   ".to_string(),
            price: "-4".to_string(),
            quantity: "-2".to_string(),
            min_stock: "3.9".to_string(),
            ..filled()
        };
        let payload = form.to_new_product(ProductId::new());

        assert_eq!(payload.name, "");
        assert_eq!(payload.price, Some(-4.0));
        assert_eq!(payload.quantity, Some(-2));
        assert_eq!(payload.min_stock, Some(3));
    }

    #[test]
    fn integers_take_leading_digits() {
        assert_eq!(parse_integer("1e3"), Some(1));
        assert_eq!(parse_integer(" 12abc"), Some(12));
        assert_eq!(parse_integer("+4"), Some(4));
        assert_eq!(parse_integer("-7.5"), Some(-7));
        assert_eq!(parse_integer(".5"), None);
        assert_eq!(parse_integer("--3"), None);
        assert_eq!(parse_integer("-"), None);
    }

    #[test]
    fn integers_outside_i64_are_dropped() {
        assert_eq!(parse_integer("99999999999999999999"), None);
        assert_eq!(parse_integer("1e30"), Some(1));
    }

    #[test]
    fn reset_clears_every_field() {
        let mut form = filled();
        assert!(!form.is_blank());
        form.reset();
        assert!(form.is_blank());
    }
}
