//! The embedded sample catalog.
//!
//! Everything the app shows comes from this module: four listings,
//! three guest reviews, the signed-in user, local conditions, and the
//! featured property. Accessors hand out independent copies so callers
//! can feed them to the state container without aliasing the source.

use crate::model::{
    FeaturedProperty, LocalInfo, Location, LoyaltyTier, Permission, PostalCode, Property, Review,
    UserProfile,
};
use once_cell::sync::Lazy;

/// The full fixture bundle, mirroring what a real deployment would
/// fetch from a listings backend.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub properties: Vec<Property>,
    pub reviews: Vec<Review>,
    pub user: UserProfile,
    pub local: LocalInfo,
    pub featured: FeaturedProperty,
}

static SAMPLE: Lazy<Catalog> = Lazy::new(build_sample);

/// An independent copy of the sample catalog.
pub fn sample() -> Catalog {
    SAMPLE.clone()
}

/// An independent copy of the sample listings only.
pub fn sample_properties() -> Vec<Property> {
    SAMPLE.properties.clone()
}

fn build_sample() -> Catalog {
    let properties = vec![
        Property {
            image: "images/italian-property.jpg".into(),
            title: "Colombian Shack".into(),
            price: 45,
            location: Location {
                first_line: "shack 37".into(),
                city: "Bogota".into(),
                code: PostalCode::Number(45632),
                country: "Colombia".into(),
            },
            contact: (112343823978921, "marywinkle@gmail.com".into()),
            is_available: true,
        },
        Property {
            image: "images/poland-property.jpg".into(),
            title: "Polish Cottage".into(),
            price: 30,
            location: Location {
                first_line: "no 23".into(),
                city: "Gdansk".into(),
                code: PostalCode::Number(343903),
                country: "Poland".into(),
            },
            contact: (1298239028490830, "garydavis@hotmail.com".into()),
            is_available: false,
        },
        Property {
            image: "images/london-property.jpg".into(),
            title: "London Flat".into(),
            price: 25,
            location: Location {
                first_line: "flat 15".into(),
                city: "London".into(),
                code: PostalCode::Text("SW4 5XW".into()),
                country: "United Kingdom".into(),
            },
            contact: (34829374892553, "andyluger@aol.com".into()),
            is_available: true,
        },
        Property {
            image: "images/malaysian-hotel.jpeg".into(),
            title: "Malia Hotel".into(),
            price: 35,
            location: Location {
                first_line: "Room 4".into(),
                city: "Malia".into(),
                code: PostalCode::Number(45334),
                country: "Malaysia".into(),
            },
            contact: (60349822083, "lee34@gmail.com".into()),
            is_available: false,
        },
    ];

    let reviews = vec![
        Review {
            name: "Sheila".into(),
            stars: 5,
            loyalty: LoyaltyTier::Gold,
            date: "01-04-2021".into(),
        },
        Review {
            name: "Andrzej".into(),
            stars: 3,
            loyalty: LoyaltyTier::Bronze,
            date: "28-03-2021".into(),
        },
        Review {
            name: "Omar".into(),
            stars: 4,
            loyalty: LoyaltyTier::Silver,
            date: "27-03-2021".into(),
        },
    ];

    let user = UserProfile {
        first_name: "Bobby".into(),
        last_name: "Brown".into(),
        permission: Permission::Admin,
        is_returning: true,
        age: 35,
        stayed_at: vec![
            "florida-home".into(),
            "oman-flat".into(),
            "tokyo-bungalow".into(),
        ],
    };

    let local = LocalInfo {
        city: "London".into(),
        time: "11.03".into(),
        temperature: 17,
    };

    let featured = FeaturedProperty {
        image: "images/italian-property.jpg".into(),
        title: "Italian Villa".into(),
        reviews: vec![Review {
            name: "Olive".into(),
            stars: 5,
            loyalty: LoyaltyTier::Gold,
            date: "12-04-2021".into(),
        }],
    };

    Catalog {
        properties,
        reviews,
        user,
        local,
        featured,
    }
}
