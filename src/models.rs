/// Core data structures: recipes, stock, order subsets and their wire shapes

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AllocatorError;

/// Dietary class of a recipe or an order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BoxType {
    Vegetarian,
    Gourmet,
}

impl BoxType {
    pub const ALL: [BoxType; 2] = [BoxType::Vegetarian, BoxType::Gourmet];

    pub fn as_str(&self) -> &'static str {
        match self {
            BoxType::Vegetarian => "vegetarian",
            BoxType::Gourmet => "gourmet",
        }
    }

    pub fn is_vegetarian(&self) -> bool {
        matches!(self, BoxType::Vegetarian)
    }
}

impl FromStr for BoxType {
    type Err = AllocatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vegetarian" => Ok(BoxType::Vegetarian),
            "gourmet" => Ok(BoxType::Gourmet),
            other => Err(AllocatorError::UnknownBoxType(other.to_string())),
        }
    }
}

impl fmt::Display for BoxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of distinct recipes in one customer's box
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecipeCount {
    Two,
    Three,
    Four,
}

impl RecipeCount {
    pub const ALL: [RecipeCount; 3] = [RecipeCount::Two, RecipeCount::Three, RecipeCount::Four];

    pub fn value(&self) -> u32 {
        match self {
            RecipeCount::Two => 2,
            RecipeCount::Three => 3,
            RecipeCount::Four => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecipeCount::Two => "two_recipes",
            RecipeCount::Three => "three_recipes",
            RecipeCount::Four => "four_recipes",
        }
    }
}

impl FromStr for RecipeCount {
    type Err = AllocatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecipeCount::ALL
            .into_iter()
            .find(|tier| tier.label() == s)
            .ok_or_else(|| AllocatorError::UnknownRecipeTier(s.to_string()))
    }
}

/// Number of portions per recipe in one customer's box
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PortionCount {
    Two,
    Four,
}

impl PortionCount {
    pub const ALL: [PortionCount; 2] = [PortionCount::Two, PortionCount::Four];

    pub fn value(&self) -> u32 {
        match self {
            PortionCount::Two => 2,
            PortionCount::Four => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PortionCount::Two => "two_portions",
            PortionCount::Four => "four_portions",
        }
    }
}

impl FromStr for PortionCount {
    type Err = AllocatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PortionCount::ALL
            .into_iter()
            .find(|tier| tier.label() == s)
            .ok_or_else(|| AllocatorError::UnknownPortionTier(s.to_string()))
    }
}

/// A stocked recipe
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recipe {
    pub name: String,
    pub box_type: BoxType,
    pub stock_count: u32,
}

/// All recipes on hand, ordered by name
///
/// The order is significant: the recipe selector breaks stock ties by
/// position, so a given `Stock` always allocates the same way.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stock {
    recipes: Vec<Recipe>,
}

impl Stock {
    pub fn new(mut recipes: Vec<Recipe>) -> Self {
        recipes.sort_by(|a, b| a.name.cmp(&b.name));
        Stock { recipes }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn counts(&self) -> Vec<u32> {
        self.recipes.iter().map(|r| r.stock_count).collect()
    }

    /// `true` at every position holding a vegetarian recipe
    pub fn vegetarian_mask(&self) -> Vec<bool> {
        self.recipes.iter().map(|r| r.box_type.is_vegetarian()).collect()
    }

    pub fn total(&self) -> u64 {
        self.recipes.iter().map(|r| r.stock_count as u64).sum()
    }

    pub fn total_for(&self, box_type: BoxType) -> u64 {
        self.recipes
            .iter()
            .filter(|r| r.box_type == box_type)
            .map(|r| r.stock_count as u64)
            .sum()
    }
}

/// Customers sharing a box type, recipe tier and portion tier
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrderSubset {
    pub box_type: BoxType,
    pub recipe_count: RecipeCount,
    pub portion_count: PortionCount,
    pub customers: u32,
}

impl OrderSubset {
    /// Portions this subset consumes if fully served
    pub fn demand(&self) -> u64 {
        self.customers as u64 * self.portion_count.value() as u64 * self.recipe_count.value() as u64
    }
}

/// Flattened order set, one entry per cell present in the input
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Orders {
    subsets: Vec<OrderSubset>,
}

impl Orders {
    /// Builds an order set, putting subsets in canonical cell order
    pub fn new(mut subsets: Vec<OrderSubset>) -> Self {
        subsets.sort_by_key(|s| (s.box_type, s.recipe_count, s.portion_count));
        Orders { subsets }
    }

    pub fn subsets(&self) -> &[OrderSubset] {
        &self.subsets
    }

    pub fn total_customers(&self) -> u64 {
        self.subsets.iter().map(|s| s.customers as u64).sum()
    }
}

/// Stock entry as it appears in serialized input
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawStockEntry {
    pub stock_count: i64,
    pub box_type: String,
}

/// recipe name -> stock entry
pub type RawStock = BTreeMap<String, RawStockEntry>;

/// box type -> recipe tier -> portion tier -> customers
pub type RawOrders = BTreeMap<String, BTreeMap<String, BTreeMap<String, i64>>>;

impl TryFrom<RawStock> for Stock {
    type Error = AllocatorError;

    fn try_from(raw: RawStock) -> Result<Self, Self::Error> {
        let mut recipes = Vec::with_capacity(raw.len());
        for (name, entry) in raw {
            let box_type: BoxType = entry.box_type.parse()?;
            if entry.stock_count < 0 {
                return Err(AllocatorError::NegativeStock {
                    recipe: name,
                    stock_count: entry.stock_count,
                });
            }
            let stock_count = u32::try_from(entry.stock_count).map_err(|_| {
                AllocatorError::StockOutOfRange {
                    recipe: name.clone(),
                    stock_count: entry.stock_count,
                }
            })?;
            recipes.push(Recipe { name, box_type, stock_count });
        }
        Ok(Stock::new(recipes))
    }
}

impl TryFrom<RawOrders> for Orders {
    type Error = AllocatorError;

    fn try_from(raw: RawOrders) -> Result<Self, Self::Error> {
        let mut subsets = Vec::new();
        for (box_label, recipe_tiers) in &raw {
            let box_type: BoxType = box_label.parse()?;
            for (recipe_label, portion_tiers) in recipe_tiers {
                let recipe_count: RecipeCount = recipe_label.parse()?;
                for (portion_label, &customers) in portion_tiers {
                    let portion_count: PortionCount = portion_label.parse()?;
                    let customers = u32::try_from(customers).map_err(|_| {
                        AllocatorError::InvalidCustomers {
                            box_type: box_label.clone(),
                            recipe_count: recipe_label.clone(),
                            portion_count: portion_label.clone(),
                            customers,
                        }
                    })?;
                    subsets.push(OrderSubset {
                        box_type,
                        recipe_count,
                        portion_count,
                        customers,
                    });
                }
            }
        }
        Ok(Orders::new(subsets))
    }
}

impl From<&Orders> for RawOrders {
    fn from(orders: &Orders) -> Self {
        let mut raw = RawOrders::new();
        for subset in orders.subsets() {
            raw.entry(subset.box_type.as_str().to_string())
                .or_default()
                .entry(subset.recipe_count.label().to_string())
                .or_default()
                .insert(subset.portion_count.label().to_string(), subset.customers as i64);
        }
        raw
    }
}

impl From<&Stock> for RawStock {
    fn from(stock: &Stock) -> Self {
        stock
            .recipes()
            .iter()
            .map(|r| {
                (
                    r.name.clone(),
                    RawStockEntry {
                        stock_count: r.stock_count as i64,
                        box_type: r.box_type.as_str().to_string(),
                    },
                )
            })
            .collect()
    }
}
