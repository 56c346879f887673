//! Urban Plate menu and restaurant profile

use shared::models::{
    Address, Contact, Feature, MenuCategory, MenuItem, OpeningHours, RestaurantInfo, SocialLinks,
};

fn item(id: &str, name: &str, description: &str, price: f64, is_veg: bool) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        is_veg,
        popular: false,
    }
}

fn popular(id: &str, name: &str, description: &str, price: f64, is_veg: bool) -> MenuItem {
    MenuItem {
        popular: true,
        ..item(id, name, description, price, is_veg)
    }
}

fn category(id: &str, name: &str, description: &str, items: Vec<MenuItem>) -> MenuCategory {
    MenuCategory {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        items,
    }
}

/// The full menu in display order
pub fn menu() -> Vec<MenuCategory> {
    vec![
        category(
            "starters",
            "Starters",
            "Begin your culinary journey with our carefully crafted appetizers",
            vec![
                popular(
                    "s1",
                    "Truffle Mushroom Bruschetta",
                    "Crispy sourdough topped with wild mushrooms, truffle oil, and aged parmesan",
                    14.99,
                    true,
                ),
                item(
                    "s2",
                    "Seared Scallops",
                    "Pan-seared scallops with cauliflower purée and citrus beurre blanc",
                    18.99,
                    false,
                ),
                popular(
                    "s3",
                    "Crispy Calamari",
                    "Lightly battered calamari with house-made aioli and lemon",
                    15.99,
                    false,
                ),
                item(
                    "s4",
                    "Burrata Caprese",
                    "Creamy burrata with heirloom tomatoes, basil, and aged balsamic",
                    16.99,
                    true,
                ),
                item(
                    "s5",
                    "Beef Carpaccio",
                    "Thinly sliced beef tenderloin with arugula, capers, and parmesan",
                    19.99,
                    false,
                ),
            ],
        ),
        category(
            "mains",
            "Main Course",
            "Signature dishes crafted with passion and the finest ingredients",
            vec![
                popular(
                    "m1",
                    "Grilled Ribeye Steak",
                    "12oz prime ribeye with herb butter, roasted vegetables, and truffle mash",
                    42.99,
                    false,
                ),
                item(
                    "m2",
                    "Pan-Roasted Salmon",
                    "Atlantic salmon with lemon dill sauce, asparagus, and wild rice",
                    34.99,
                    false,
                ),
                popular(
                    "m3",
                    "Lobster Linguine",
                    "Fresh lobster tail with cherry tomatoes, garlic, and white wine sauce",
                    38.99,
                    false,
                ),
                popular(
                    "m4",
                    "Wild Mushroom Risotto",
                    "Arborio rice with porcini, chanterelle, truffle oil, and aged parmesan",
                    28.99,
                    true,
                ),
                item(
                    "m5",
                    "Roasted Duck Breast",
                    "Cherry-glazed duck with sweet potato purée and seasonal greens",
                    36.99,
                    false,
                ),
                item(
                    "m6",
                    "Grilled Mediterranean Vegetables",
                    "Seasonal vegetables with herb couscous and tahini drizzle",
                    24.99,
                    true,
                ),
            ],
        ),
        category(
            "desserts",
            "Desserts",
            "Sweet endings to complete your dining experience",
            vec![
                popular(
                    "d1",
                    "Chocolate Lava Cake",
                    "Warm molten chocolate cake with vanilla bean ice cream",
                    12.99,
                    true,
                ),
                item(
                    "d2",
                    "Crème Brûlée",
                    "Classic vanilla custard with caramelized sugar crust",
                    10.99,
                    true,
                ),
                popular(
                    "d3",
                    "Tiramisu",
                    "Espresso-soaked ladyfingers with mascarpone and cocoa",
                    11.99,
                    true,
                ),
                item(
                    "d4",
                    "Seasonal Fruit Tart",
                    "Buttery pastry with vanilla custard and fresh fruits",
                    10.99,
                    true,
                ),
            ],
        ),
        category(
            "beverages",
            "Beverages",
            "Refreshing drinks and artisanal cocktails",
            vec![
                item(
                    "b1",
                    "Signature Mojito",
                    "Fresh mint, lime, rum, and a splash of soda",
                    12.99,
                    true,
                ),
                popular(
                    "b2",
                    "Espresso Martini",
                    "Vodka, coffee liqueur, and fresh espresso",
                    14.99,
                    true,
                ),
                item(
                    "b3",
                    "Fresh Fruit Smoothie",
                    "Blend of seasonal fruits with yogurt and honey",
                    8.99,
                    true,
                ),
                item(
                    "b4",
                    "Artisan Lemonade",
                    "House-made lemonade with herbs and a hint of ginger",
                    6.99,
                    true,
                ),
                item(
                    "b5",
                    "Premium Wine Selection",
                    "Ask your server for our curated wine list",
                    15.99,
                    true,
                ),
            ],
        ),
    ]
}

pub fn restaurant_info() -> RestaurantInfo {
    let hours = [
        ("Monday", "Closed"),
        ("Tuesday", "5:00 PM - 10:00 PM"),
        ("Wednesday", "5:00 PM - 10:00 PM"),
        ("Thursday", "5:00 PM - 10:00 PM"),
        ("Friday", "5:00 PM - 11:00 PM"),
        ("Saturday", "12:00 PM - 11:00 PM"),
        ("Sunday", "12:00 PM - 9:00 PM"),
    ];
    let features = [
        (
            "Farm to Table",
            "Fresh ingredients sourced from local farmers and artisan producers.",
        ),
        (
            "Award Winning",
            "Recognized for culinary excellence with multiple industry awards.",
        ),
        (
            "Private Dining",
            "Exclusive spaces for intimate gatherings and special celebrations.",
        ),
    ];

    RestaurantInfo {
        name: "Urban Plate".to_string(),
        tagline: "Where Culinary Art Meets Urban Elegance".to_string(),
        description: "Experience the finest fusion of traditional flavors and contemporary cuisine in the heart of the city.".to_string(),
        address: Address {
            street: "123 Gourmet Avenue".to_string(),
            city: "Downtown".to_string(),
            state: "CA".to_string(),
            zip: "90210".to_string(),
            country: "USA".to_string(),
        },
        contact: Contact {
            phone: "+1 (555) 123-4567".to_string(),
            email: "reservations@urbanplate.com".to_string(),
            whatsapp: "+15551234567".to_string(),
        },
        social: SocialLinks {
            instagram: "https://instagram.com/urbanplate".to_string(),
            facebook: "https://facebook.com/urbanplate".to_string(),
            twitter: "https://twitter.com/urbanplate".to_string(),
        },
        hours: hours
            .iter()
            .map(|(day, hours)| OpeningHours {
                day: day.to_string(),
                hours: hours.to_string(),
            })
            .collect(),
        features: features
            .iter()
            .map(|(title, description)| Feature {
                title: title.to_string(),
                description: description.to_string(),
            })
            .collect(),
    }
}
