//! Seed data for the Zephyra catalog.
//!
//! Defined once at process start; the rest of the application treats this
//! as immutable reference data.

use std::collections::HashMap;

use rust_decimal::Decimal;

use zephyra_core::ProductId;

use super::{Category, Product, ProductTag};

/// The category taxonomy.
pub fn categories() -> Vec<Category> {
    vec![
        Category {
            name: "Skincare".to_string(),
            subcategories: Vec::new(),
        },
        Category {
            name: "Haircare".to_string(),
            subcategories: vec![
                Category {
                    name: "Shampoo".to_string(),
                    subcategories: Vec::new(),
                },
                Category {
                    name: "Conditioner".to_string(),
                    subcategories: Vec::new(),
                },
                Category {
                    name: "Hair Oil".to_string(),
                    subcategories: Vec::new(),
                },
            ],
        },
    ]
}

struct ProductSeed {
    id: i32,
    name: &'static str,
    /// Price in hundredths of the currency unit.
    price_cents: i64,
    prices: &'static [(&'static str, i64)],
    image_url: &'static str,
    images: &'static [&'static str],
    sizes: &'static [&'static str],
    description: Option<&'static str>,
    category: &'static str,
    subcategory: Option<&'static str>,
    tag: Option<ProductTag>,
}

impl ProductSeed {
    fn build(&self) -> Product {
        Product {
            id: ProductId::new(self.id),
            name: self.name.to_string(),
            price: Decimal::new(self.price_cents, 2),
            prices: if self.prices.is_empty() {
                None
            } else {
                Some(
                    self.prices
                        .iter()
                        .map(|(size, cents)| ((*size).to_string(), Decimal::new(*cents, 2)))
                        .collect::<HashMap<_, _>>(),
                )
            },
            image_url: self.image_url.to_string(),
            images: if self.images.is_empty() {
                None
            } else {
                Some(self.images.iter().map(|url| (*url).to_string()).collect())
            },
            sizes: if self.sizes.is_empty() {
                None
            } else {
                Some(self.sizes.iter().map(|size| (*size).to_string()).collect())
            },
            description: self.description.map(String::from),
            category: self.category.to_string(),
            subcategory: self.subcategory.map(String::from),
            tag: self.tag,
        }
    }
}

const PRODUCTS: &[ProductSeed] = &[
    ProductSeed {
        id: 1,
        name: "Hydrating Facial Cleanser",
        price_cents: 2499,
        prices: &[],
        image_url: "https://picsum.photos/seed/p1/400/400",
        images: &[],
        sizes: &[],
        description: None,
        category: "Skincare",
        subcategory: None,
        tag: Some(ProductTag::Bestseller),
    },
    ProductSeed {
        id: 2,
        name: "Vitamin C Serum",
        price_cents: 4500,
        prices: &[],
        image_url: "https://picsum.photos/seed/p2/400/400",
        images: &[],
        sizes: &[],
        description: None,
        category: "Skincare",
        subcategory: None,
        tag: Some(ProductTag::New),
    },
    ProductSeed {
        id: 3,
        name: "Daily Moisturizer SPF 30",
        price_cents: 3250,
        prices: &[],
        image_url: "https://picsum.photos/seed/p3/400/400",
        images: &[],
        sizes: &[],
        description: None,
        category: "Skincare",
        subcategory: None,
        tag: None,
    },
    ProductSeed {
        id: 4,
        name: "Restorative Night Cream",
        price_cents: 5500,
        prices: &[],
        image_url: "https://picsum.photos/seed/p4/400/400",
        images: &[],
        sizes: &[],
        description: None,
        category: "Skincare",
        subcategory: None,
        tag: None,
    },
    ProductSeed {
        id: 5,
        name: "Volumizing Shampoo",
        price_cents: 2800,
        prices: &[],
        image_url: "https://picsum.photos/seed/p5/400/400",
        images: &[],
        sizes: &[],
        description: None,
        category: "Haircare",
        subcategory: Some("Shampoo"),
        tag: Some(ProductTag::New),
    },
    ProductSeed {
        id: 6,
        name: "Keratin Smooth Shampoo",
        price_cents: 3000,
        prices: &[],
        image_url: "https://picsum.photos/seed/p6/400/400",
        images: &[],
        sizes: &[],
        description: None,
        category: "Haircare",
        subcategory: Some("Shampoo"),
        tag: None,
    },
    ProductSeed {
        id: 13,
        name: "Glycolic Gloss Shampoo",
        price_cents: 99_000,
        prices: &[("440ml", 99_000), ("200ml", 50_000)],
        image_url: "https://i.imgur.com/n0VRaGV.png",
        images: &[
            "https://i.imgur.com/n0VRaGV.png",
            "https://i.imgur.com/PzWCPFx.png",
            "https://i.imgur.com/d9QaXvm.png",
            "https://i.imgur.com/GPv367e.png",
            "https://i.imgur.com/R9mYzBf.png",
        ],
        sizes: &["440ml", "200ml"],
        description: Some(
            "Loreal Paris Glycolic Gloss Shampoo which makes your hair frizz-free & \
             manageable. Enjoy smooth & glossy hair all day!",
        ),
        category: "Haircare",
        subcategory: Some("Shampoo"),
        tag: Some(ProductTag::New),
    },
    ProductSeed {
        id: 7,
        name: "Deep Hydration Conditioner",
        price_cents: 2800,
        prices: &[],
        image_url: "https://picsum.photos/seed/p7/400/400",
        images: &[],
        sizes: &[],
        description: None,
        category: "Haircare",
        subcategory: Some("Conditioner"),
        tag: None,
    },
    ProductSeed {
        id: 8,
        name: "Color Protect Conditioner",
        price_cents: 3200,
        prices: &[],
        image_url: "https://picsum.photos/seed/p8/400/400",
        images: &[],
        sizes: &[],
        description: None,
        category: "Haircare",
        subcategory: Some("Conditioner"),
        tag: Some(ProductTag::Bestseller),
    },
    ProductSeed {
        id: 9,
        name: "Argan Hair Oil",
        price_cents: 3500,
        prices: &[],
        image_url: "https://picsum.photos/seed/p9/400/400",
        images: &[],
        sizes: &[],
        description: None,
        category: "Haircare",
        subcategory: Some("Hair Oil"),
        tag: None,
    },
    ProductSeed {
        id: 10,
        name: "Rosemary Strengthening Oil",
        price_cents: 2550,
        prices: &[],
        image_url: "https://picsum.photos/seed/p10/400/400",
        images: &[],
        sizes: &[],
        description: None,
        category: "Haircare",
        subcategory: Some("Hair Oil"),
        tag: None,
    },
    ProductSeed {
        id: 11,
        name: "Gentle Exfoliating Scrub",
        price_cents: 2999,
        prices: &[],
        image_url: "https://picsum.photos/seed/p11/400/400",
        images: &[],
        sizes: &[],
        description: None,
        category: "Skincare",
        subcategory: None,
        tag: None,
    },
    ProductSeed {
        id: 12,
        name: "Anti-Dandruff Shampoo",
        price_cents: 2700,
        prices: &[],
        image_url: "https://picsum.photos/seed/p12/400/400",
        images: &[],
        sizes: &[],
        description: None,
        category: "Haircare",
        subcategory: Some("Shampoo"),
        tag: None,
    },
];

/// All catalog products, in display order.
pub fn products() -> Vec<Product> {
    PRODUCTS.iter().map(ProductSeed::build).collect()
}
