use serde::{Deserialize, Serialize};

/// Basic metadata describing a chemical element.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub atomic_number: u8,
    pub symbol: &'static str,
    pub name: &'static str,
    pub standard_atomic_weight: f32,
    pub default_neutrons: u8,
}

impl Element {
    pub const fn new(
        atomic_number: u8,
        symbol: &'static str,
        name: &'static str,
        standard_atomic_weight: f32,
        default_neutrons: u8,
    ) -> Self {
        Self {
            atomic_number,
            symbol,
            name,
            standard_atomic_weight,
            default_neutrons,
        }
    }

    pub const fn carbon() -> Self {
        Self::new(6, "C", "Carbon", 12.011, 6)
    }

    pub fn default_proton_count(&self) -> usize {
        usize::from(self.atomic_number)
    }

    pub fn default_neutron_count(&self) -> usize {
        usize::from(self.default_neutrons)
    }

    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Isotope label such as `Carbon-12` for the given mass number.
    pub fn isotope_label(&self, mass_number: usize) -> String {
        format!("{}-{}", self.name, mass_number)
    }

    /// Standard atomic weight in unified atomic mass units, e.g. `12.011 u`.
    pub fn mass_label(&self) -> String {
        format!("{:.3} u", self.standard_atomic_weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carbon_labels() {
        let carbon = Element::carbon();
        assert_eq!(carbon.symbol(), "C");
        assert_eq!(carbon.default_proton_count(), 6);
        assert_eq!(carbon.default_neutron_count(), 6);
        assert_eq!(carbon.isotope_label(12), "Carbon-12");
        assert_eq!(carbon.mass_label(), "12.011 u");
    }
}
