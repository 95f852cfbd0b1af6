//! The demo catalog shipped with the store: three hoodies, three hats, three pairs of shoes.

use super::Product;
use crate::types::{Category, Price, Sku};

struct Seed {
    sku: &'static str,
    name: &'static str,
    price: u32,
    description: &'static str,
    category: Category,
    color: &'static str,
    stock: &'static [(&'static str, u32)],
    image: &'static str,
    features: &'static [&'static str],
}

const SEEDS: &[Seed] = &[
    Seed {
        sku: "HOODIE-BLACK-001",
        name: "Classic Black Hoodie",
        price: 45,
        description: "Premium cotton blend hoodie with embroidered logo",
        category: Category::Hoodie,
        color: "black",
        stock: &[("S", 50), ("M", 75), ("L", 100), ("XL", 60), ("XXL", 30)],
        image: "/images/hoodie-black.jpg",
        features: &["100% organic cotton", "Kangaroo pocket", "Embroidered logo"],
    },
    Seed {
        sku: "HOODIE-GRAY-002",
        name: "Tech Gray Hoodie",
        price: 55,
        description: "Tech fleece hoodie with zippered pockets",
        category: Category::Hoodie,
        color: "gray",
        stock: &[("S", 30), ("M", 45), ("L", 50), ("XL", 25)],
        image: "/images/hoodie-gray.jpg",
        features: &["Tech fleece fabric", "Zip-up hood", "Phone pocket"],
    },
    Seed {
        sku: "HOODIE-NAVY-003",
        name: "Navy Creator Hoodie",
        price: 50,
        description: "Limited edition creator series hoodie",
        category: Category::Hoodie,
        color: "navy",
        stock: &[("M", 20), ("L", 25), ("XL", 15)],
        image: "/images/hoodie-navy.jpg",
        features: &["Limited edition", "Oversized fit", "Special edition patch"],
    },
    Seed {
        sku: "HAT-BLACK-001",
        name: "Signature Snapback",
        price: 25,
        description: "Classic snapback with embroidered logo",
        category: Category::Hat,
        color: "black",
        stock: &[("OS", 200)],
        image: "/images/hat-black.jpg",
        features: &["Adjustable snapback", "Embroidered logo", "Flat brim"],
    },
    Seed {
        sku: "HAT-RED-002",
        name: "Creator Beanie",
        price: 20,
        description: "Warm knit beanie for cold days",
        category: Category::Hat,
        color: "red",
        stock: &[("OS", 150)],
        image: "/images/hat-red.jpg",
        features: &["100% acrylic", "One size fits all", "Woven label"],
    },
    Seed {
        sku: "HAT-WHITE-003",
        name: "Dad Cap",
        price: 22,
        description: "Vintage-style dad cap with curved brim",
        category: Category::Hat,
        color: "white",
        stock: &[("OS", 100)],
        image: "/images/hat-white.jpg",
        features: &["Adjustable strap", "Curved brim", "Soft cotton"],
    },
    Seed {
        sku: "SHOES-BLACK-001",
        name: "Creator Sneakers",
        price: 120,
        description: "Limited edition signature sneakers",
        category: Category::Shoes,
        color: "black",
        stock: &[("7", 20), ("8", 30), ("9", 40), ("10", 45), ("11", 35), ("12", 20)],
        image: "/images/shoes-black.jpg",
        features: &["Premium leather", "Custom insole", "Limited edition"],
    },
    Seed {
        sku: "SHOES-WHITE-002",
        name: "Cloud Walker Sneakers",
        price: 95,
        description: "Ultra-comfortable everyday sneakers",
        category: Category::Shoes,
        color: "white",
        stock: &[("6", 15), ("7", 25), ("8", 35), ("9", 40), ("10", 30), ("11", 20)],
        image: "/images/shoes-white.jpg",
        features: &["Memory foam", "Breathable mesh", "Lightweight"],
    },
    Seed {
        sku: "SHOES-RED-003",
        name: "Studio High-Tops",
        price: 110,
        description: "High-top sneakers for creators",
        category: Category::Shoes,
        color: "red",
        stock: &[("8", 20), ("9", 25), ("10", 30), ("11", 15)],
        image: "/images/shoes-red.jpg",
        features: &["High-top design", "Ankle support", "Signature colorway"],
    },
];

/// Build the demo products. Seeds that fail to parse are skipped; the
/// catalog tests assert that none do.
pub(super) fn products() -> Vec<Product> {
    SEEDS.iter().filter_map(Seed::to_product).collect()
}

impl Seed {
    fn to_product(&self) -> Option<Product> {
        Some(Product {
            sku: Sku::parse(self.sku).ok()?,
            name: self.name.to_string(),
            price: Price::new(self.price).ok()?,
            description: self.description.to_string(),
            category: self.category,
            color: self.color.to_string(),
            sizes: self.stock.iter().map(|(size, _)| (*size).to_string()).collect(),
            inventory: self
                .stock
                .iter()
                .map(|(size, qty)| ((*size).to_string(), *qty))
                .collect(),
            image: self.image.to_string(),
            features: Some(self.features.iter().map(|f| (*f).to_string()).collect()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_seed_parses() {
        assert_eq!(products().len(), SEEDS.len());
        assert_eq!(SEEDS.len(), 9);
    }
}
