//! Production model: decision variables and resource constraints.

use std::fmt;

use thiserror::Error;

/// Error raised while building a production model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Two constraints share a name.
    #[error("duplicate constraint name: {0}")]
    DuplicateConstraint(String),

    /// A constraint has no name.
    #[error("constraint names must not be empty")]
    UnnamedConstraint,
}

/// A product whose production count is a decision variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Product {
    Lemonade,
    FruitJuice,
}

impl Product {
    /// All products in variable order.
    pub const ALL: [Product; 2] = [Product::Lemonade, Product::FruitJuice];

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Product::Lemonade => "Lemonade",
            Product::FruitJuice => "Fruit Juice",
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Non-negative integer production counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ProductionMix {
    pub lemonade: u32,
    pub juice: u32,
}

impl ProductionMix {
    pub fn new(lemonade: u32, juice: u32) -> Self {
        Self { lemonade, juice }
    }

    /// Units produced of the given product.
    pub fn units(&self, product: Product) -> u32 {
        match product {
            Product::Lemonade => self.lemonade,
            Product::FruitJuice => self.juice,
        }
    }

    /// Total units produced across both products.
    pub fn total(&self) -> u32 {
        self.lemonade + self.juice
    }
}

/// A named linear inequality `lemonade·x + juice·y <= capacity`.
///
/// # Example
///
/// ```
/// use numforge_planner::{Constraint, ProductionMix};
///
/// let water = Constraint::new("water", 2, 1, 100);
/// assert_eq!(water.lhs(ProductionMix::new(30, 20)), 80);
/// assert_eq!(water.slack(ProductionMix::new(30, 20)), 20);
/// assert!(!water.is_satisfied_by(ProductionMix::new(50, 1)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    name: String,
    lemonade: i64,
    juice: i64,
    capacity: i64,
}

impl Constraint {
    pub fn new(name: impl Into<String>, lemonade: i64, juice: i64, capacity: i64) -> Self {
        Self {
            name: name.into(),
            lemonade,
            juice,
            capacity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resource usage per unit of `product`.
    pub fn coefficient(&self, product: Product) -> i64 {
        match product {
            Product::Lemonade => self.lemonade,
            Product::FruitJuice => self.juice,
        }
    }

    /// Available amount of the resource.
    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    /// Resource consumed by `mix`, widened so no coefficient can overflow.
    pub fn lhs(&self, mix: ProductionMix) -> i128 {
        i128::from(self.lemonade) * i128::from(mix.lemonade)
            + i128::from(self.juice) * i128::from(mix.juice)
    }

    /// Remaining capacity under `mix`; negative when violated.
    pub fn slack(&self, mix: ProductionMix) -> i128 {
        i128::from(self.capacity) - self.lhs(mix)
    }

    pub fn is_satisfied_by(&self, mix: ProductionMix) -> bool {
        self.slack(mix) >= 0
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}*lemonade + {}*juice <= {}",
            self.name, self.lemonade, self.juice, self.capacity
        )
    }
}

/// Integer program maximizing `lemonade + juice` under a fixed constraint set.
///
/// The constraint set is supplied at construction and cannot be changed
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductionModel {
    constraints: Vec<Constraint>,
}

impl ProductionModel {
    /// Builds a model from a list of constraints.
    ///
    /// # Errors
    ///
    /// Returns an error if a constraint is unnamed or a name is repeated.
    pub fn new(constraints: Vec<Constraint>) -> Result<Self, ModelError> {
        for (i, constraint) in constraints.iter().enumerate() {
            if constraint.name.is_empty() {
                return Err(ModelError::UnnamedConstraint);
            }
            if constraints[..i].iter().any(|c| c.name == constraint.name) {
                return Err(ModelError::DuplicateConstraint(constraint.name.clone()));
            }
        }
        Ok(Self { constraints })
    }

    /// The shared-resource model: water, sugar, lemon juice and fruit puree.
    pub fn standard() -> Self {
        Self {
            constraints: vec![
                Constraint::new("water", 2, 1, 100),
                Constraint::new("sugar", 1, 0, 50),
                Constraint::new("lemon_juice", 1, 0, 30),
                Constraint::new("fruit_puree", 0, 2, 40),
            ],
        }
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Objective coefficient of `product`; every unit counts once.
    pub fn objective_coefficient(&self, _product: Product) -> i64 {
        1
    }

    /// Objective value at `mix`.
    pub fn objective(&self, mix: ProductionMix) -> i64 {
        Product::ALL
            .iter()
            .map(|&p| self.objective_coefficient(p) * i64::from(mix.units(p)))
            .sum()
    }

    /// Returns the first constraint violated by `mix`, if any.
    pub fn violated_constraint(&self, mix: ProductionMix) -> Option<&Constraint> {
        self.constraints.iter().find(|c| !c.is_satisfied_by(mix))
    }

    pub fn is_feasible(&self, mix: ProductionMix) -> bool {
        self.violated_constraint(mix).is_none()
    }
}

impl Default for ProductionModel {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_model_constraints() {
        let model = ProductionModel::standard();
        let names: Vec<_> = model.constraints().iter().map(Constraint::name).collect();
        assert_eq!(names, ["water", "sugar", "lemon_juice", "fruit_puree"]);
    }

    #[test]
    fn test_feasibility() {
        let model = ProductionModel::standard();
        assert!(model.is_feasible(ProductionMix::new(30, 20)));
        assert!(model.is_feasible(ProductionMix::default()));

        let over_lemon = ProductionMix::new(31, 0);
        assert_eq!(
            model.violated_constraint(over_lemon).map(Constraint::name),
            Some("lemon_juice")
        );

        let over_puree = ProductionMix::new(0, 21);
        assert_eq!(
            model.violated_constraint(over_puree).map(Constraint::name),
            Some("fruit_puree")
        );
    }

    #[test]
    fn test_objective() {
        let model = ProductionModel::standard();
        let mix = ProductionMix::new(12, 7);
        assert_eq!(model.objective(mix), 19);
        assert_eq!(mix.total(), 19);
    }

    #[test]
    fn test_duplicate_constraint_rejected() {
        let err = ProductionModel::new(vec![
            Constraint::new("water", 1, 1, 10),
            Constraint::new("water", 2, 0, 5),
        ])
        .unwrap_err();
        assert_eq!(err, ModelError::DuplicateConstraint("water".to_string()));
    }

    #[test]
    fn test_extreme_coefficients_do_not_overflow() {
        let steep = Constraint::new("steep", i64::MAX, i64::MAX, i64::MAX);
        let mix = ProductionMix::new(u32::MAX, u32::MAX);
        assert!(!steep.is_satisfied_by(mix));
        assert!(steep.is_satisfied_by(ProductionMix::new(1, 0)));
    }

    #[test]
    fn test_unnamed_constraint_rejected() {
        let err = ProductionModel::new(vec![Constraint::new("", 1, 1, 10)]).unwrap_err();
        assert_eq!(err, ModelError::UnnamedConstraint);
    }

    #[test]
    fn test_constraint_display() {
        let c = Constraint::new("sugar", 1, 0, 50);
        assert_eq!(c.to_string(), "sugar: 1*lemonade + 0*juice <= 50");
    }
}
