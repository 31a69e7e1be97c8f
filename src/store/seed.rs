// Catalog seeding
// Built-in bakery catalog, optionally replaced table-by-table from a TOML file

use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;
use thiserror::Error;

use super::model::{Product, TeamMember, Testimonial};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid seed file: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Initial contents of the store
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub team: Vec<TeamMember>,
    pub testimonials: Vec<Testimonial>,
}

/// Seed file layout; every table is optional
#[derive(Debug, Default, Deserialize)]
struct SeedFile {
    #[serde(default)]
    products: Option<Vec<Product>>,
    #[serde(default)]
    team: Option<Vec<TeamMember>>,
    #[serde(default)]
    testimonials: Option<Vec<Testimonial>>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            products: default_products(),
            team: default_team(),
            testimonials: default_testimonials(),
        }
    }
}

impl Catalog {
    /// Parse seed TOML, keeping built-in rows for tables it omits
    pub fn from_toml_str(source: &str) -> Result<Self, SeedError> {
        let seed: SeedFile = toml::from_str(source)?;
        let mut catalog = Self::default();
        if let Some(products) = seed.products {
            catalog.products = products;
        }
        if let Some(team) = seed.team {
            catalog.team = team;
        }
        if let Some(testimonials) = seed.testimonials {
            catalog.testimonials = testimonials;
        }
        Ok(catalog)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&source)
    }
}

fn product(id: i64, name: &str, price: f64, image: &str, quantity: i64) -> Product {
    Product {
        id,
        name: Value::from(name),
        price: Value::from(price),
        image: Value::from(image),
        quantity: Value::from(quantity),
        extra: Map::new(),
    }
}

fn default_products() -> Vec<Product> {
    vec![
        product(1, "Cake", 49.99, "img/product-1.jpg", 10),
        product(2, "Bread", 14.99, "img/product-2.jpg", 20),
        product(3, "Cookies", 24.49, "img/product-3.jpg", 30),
        product(4, "Pastry", 15.00, "img/product-1.jpg", 15),
        product(5, "Donuts", 10.00, "img/product-2.jpg", 25),
        product(6, "Croissants", 12.00, "img/product-3.jpg", 12),
    ]
}

fn default_team() -> Vec<TeamMember> {
    [
        (1, "ganesh jadhav", "Master Chef"),
        (2, "akshay malviya", "Bakery Specialist"),
        (3, "krushna kharat", "Cake Decorator"),
        (4, "rushikesh yadhav", "Pastry Expert"),
    ]
    .into_iter()
    .map(|(id, name, role)| TeamMember {
        id,
        name: name.to_string(),
        role: role.to_string(),
        image: format!("img/team-{id}.jpg"),
    })
    .collect()
}

fn default_testimonials() -> Vec<Testimonial> {
    [
        (1, "John", "Best bakery in town"),
        (2, "Emma", "Amazing croissants"),
        (3, "Liam", "Great service and coffee"),
    ]
    .into_iter()
    .map(|(id, name, text)| Testimonial {
        id,
        name: name.to_string(),
        text: text.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog() {
        let catalog = Catalog::default();
        assert_eq!(catalog.products.len(), 6);
        assert_eq!(catalog.products[5].name, "Croissants");
        assert_eq!(catalog.team.len(), 4);
        assert_eq!(catalog.team[2].image, "img/team-3.jpg");
        assert_eq!(catalog.testimonials.len(), 3);
    }

    #[test]
    fn test_seed_replaces_only_given_tables() {
        let source = r#"
            [[products]]
            id = 10
            name = "Baguette"
            price = 3.5
            image = "img/baguette.jpg"
            quantity = 40
        "#;
        let catalog = Catalog::from_toml_str(source).unwrap();
        assert_eq!(catalog.products.len(), 1);
        assert_eq!(catalog.products[0].id, 10);
        assert_eq!(catalog.products[0].price, 3.5);
        assert_eq!(catalog.team, Catalog::default().team);
        assert_eq!(catalog.testimonials.len(), 3);
    }

    #[test]
    fn test_empty_seed_keeps_defaults() {
        assert_eq!(Catalog::from_toml_str("").unwrap(), Catalog::default());
    }

    #[test]
    fn test_malformed_seed_rejected() {
        let err = Catalog::from_toml_str("[[products]]\nid = \"x\"").unwrap_err();
        assert!(matches!(err, SeedError::Toml(_)));
    }

    #[test]
    fn test_missing_seed_file() {
        let err = Catalog::from_file("no/such/seed.toml").unwrap_err();
        assert!(err.to_string().contains("no/such/seed.toml"));
    }
}
