//! Starter content per business type.
//!
//! Plain lookup tables: a [`BusinessType`] maps to a tagline, a description,
//! and a sample menu, written in one of two [`Voice`]s. Unknown business type
//! keys fall back to a generic entry with no menu.

use crate::record::{BusinessRecord, RawMenuItem, RawMenuItems};
use crate::theme::Theme;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessType {
    CoffeeShop,
    Bakery,
    BarberShop,
    FoodStall,
    LaundryService,
    PhotographerCreator,
}

/// Tone of the canned copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Voice {
    /// Spooky copy, paired with the kiroween theme.
    #[default]
    Haunted,
    /// Straightforward copy, paired with the classic theme.
    Normal,
}

impl Voice {
    pub fn theme(self) -> Theme {
        match self {
            Voice::Haunted => Theme::Kiroween,
            Voice::Normal => Theme::Classic,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    pub tagline: &'static str,
    pub description: &'static str,
    pub menu_items: &'static [(&'static str, &'static str)],
}

impl BusinessType {
    pub const ALL: [BusinessType; 6] = [
        BusinessType::CoffeeShop,
        BusinessType::Bakery,
        BusinessType::BarberShop,
        BusinessType::FoodStall,
        BusinessType::LaundryService,
        BusinessType::PhotographerCreator,
    ];

    pub fn key(self) -> &'static str {
        match self {
            BusinessType::CoffeeShop => "coffee_shop",
            BusinessType::Bakery => "bakery",
            BusinessType::BarberShop => "barber_shop",
            BusinessType::FoodStall => "food_stall",
            BusinessType::LaundryService => "laundry_service",
            BusinessType::PhotographerCreator => "photographer_creator",
        }
    }

    pub fn from_key(key: &str) -> Option<BusinessType> {
        BusinessType::ALL.into_iter().find(|t| t.key() == key)
    }

    /// Human label, e.g. "Coffee Shop".
    pub fn label(self) -> &'static str {
        match self {
            BusinessType::CoffeeShop => "Coffee Shop",
            BusinessType::Bakery => "Bakery",
            BusinessType::BarberShop => "Barber Shop",
            BusinessType::FoodStall => "Food Stall",
            BusinessType::LaundryService => "Laundry Service",
            BusinessType::PhotographerCreator => "Photographer / Creator",
        }
    }

    fn menu(self) -> &'static [(&'static str, &'static str)] {
        match self {
            BusinessType::CoffeeShop => &[
                ("Midnight Espresso", "Rp 15,000"),
                ("Phantom Cappuccino", "Rp 25,000"),
                ("Ghostly Latte", "Rp 28,000"),
                ("Cursed Croissant", "Rp 18,000"),
                ("Witch's Cold Brew", "Rp 30,000"),
            ],
            BusinessType::Bakery => &[
                ("Sourdough of Souls", "Rp 35,000"),
                ("Devil's Chocolate Cake", "Rp 120,000"),
                ("Phantom Croissant", "Rp 15,000"),
                ("Cinnamon Specter Roll", "Rp 20,000"),
                ("Haunted Honey Bread", "Rp 25,000"),
            ],
            BusinessType::BarberShop => &[
                ("The Transformation", "Rp 50,000"),
                ("Beard of Shadows", "Rp 30,000"),
                ("Midnight Shave", "Rp 45,000"),
                ("Full Moon Package", "Rp 75,000"),
                ("The Resurrection", "Rp 100,000"),
            ],
            BusinessType::FoodStall => &[
                ("Nasi Goreng Hantu", "Rp 15,000"),
                ("Mie Ayam Misterius", "Rp 12,000"),
                ("Sate Tengah Malam", "Rp 18,000"),
                ("Es Teh Kegelapan", "Rp 5,000"),
                ("Bakso Bayangan", "Rp 15,000"),
            ],
            BusinessType::LaundryService => &[
                ("Vanishing Wash (per kg)", "Rp 8,000"),
                ("Spectral Press (per kg)", "Rp 12,000"),
                ("Exorcism Clean (per item)", "Rp 25,000"),
                ("Midnight Express", "Rp 15,000"),
                ("The Full Cleansing", "Rp 50,000"),
            ],
            BusinessType::PhotographerCreator => &[
                ("Soul Portrait (1 hour)", "Rp 500,000"),
                ("Séance Coverage (half day)", "Rp 1,500,000"),
                ("Phantom Media Pack (10 photos)", "Rp 750,000"),
                ("Artifact Photography (per item)", "Rp 100,000"),
                ("The Eternal Session", "Rp 2,000,000"),
            ],
        }
    }

    fn copy(self, voice: Voice) -> (&'static str, &'static str) {
        match (self, voice) {
            (BusinessType::CoffeeShop, Voice::Haunted) => (
                "Coffee so dark it might wake the dead",
                "A mysteriously cozy café where shadows gather and coffee flows eternal. Our beans are roasted under moonlight, and our baristas have been perfecting their craft for... longer than you'd believe.",
            ),
            (BusinessType::CoffeeShop, Voice::Normal) => (
                "Your Daily Dose of Happiness",
                "Artisan coffee and fresh pastries in a cozy atmosphere. We serve premium coffee beans sourced from local farms.",
            ),
            (BusinessType::Bakery, Voice::Haunted) => (
                "Baked fresh daily. Some say our recipes are centuries old.",
                "Our ovens have been burning since before anyone can remember. Each pastry holds a secret, each bread tells a story. The aroma draws you in... and keeps you coming back.",
            ),
            (BusinessType::Bakery, Voice::Normal) => (
                "Freshly Baked Every Day",
                "Homemade breads, cakes, and pastries made with love. Using traditional recipes and quality ingredients.",
            ),
            (BusinessType::BarberShop, Voice::Haunted) => (
                "A cut so sharp you'll forget who you were when you walked in",
                "Step into our chair and emerge transformed. Our blades are ancient, our skills timeless. Every cut tells a story, every shave reveals a new you. Walk-ins welcome... if you dare.",
            ),
            (BusinessType::BarberShop, Voice::Normal) => (
                "Where Style Meets Precision",
                "Professional haircuts and grooming services for the modern gentleman. Walk-ins welcome.",
            ),
            (BusinessType::FoodStall, Voice::Haunted) => (
                "Food so good, you'll come back. They always come back.",
                "Our recipes have been passed down through generations... and perhaps beyond. Each dish is prepared with ingredients you won't find anywhere else. One taste and you'll understand why our customers never leave.",
            ),
            (BusinessType::FoodStall, Voice::Normal) => (
                "Delicious & Affordable Street Food",
                "Authentic Indonesian street food made fresh daily. Quality meals at prices everyone can afford.",
            ),
            (BusinessType::LaundryService, Voice::Haunted) => (
                "Your stains will vanish without a trace. No questions asked.",
                "We make things disappear. Stains, odors, evidence of yesterday's adventures: all gone by morning. Our methods are... unconventional, but the results speak for themselves.",
            ),
            (BusinessType::LaundryService, Voice::Normal) => (
                "Clean Clothes, Fast Service",
                "Professional laundry service with same-day turnaround. We handle your clothes with care.",
            ),
            (BusinessType::PhotographerCreator, Voice::Haunted) => (
                "We capture what others can't see. Memories that last forever.",
                "Our lens sees beyond the ordinary. We capture moments that transcend time, images that reveal hidden truths. Some say our photos show more than what was there.",
            ),
            (BusinessType::PhotographerCreator, Voice::Normal) => (
                "Capturing Your Best Moments",
                "Professional photography and content creation services. Specializing in portraits, events, and social media content.",
            ),
        }
    }

    pub fn preset(self, voice: Voice) -> Preset {
        let (tagline, description) = self.copy(voice);
        Preset {
            tagline,
            description,
            menu_items: self.menu(),
        }
    }
}

fn fallback(voice: Voice) -> Preset {
    let (tagline, description) = match voice {
        Voice::Haunted => (
            "Something wonderful lurks within",
            "A local business with a few secrets of its own. Stop by, say hello, and see what we have waiting for you.",
        ),
        Voice::Normal => (
            "Quality Service You Can Trust",
            "A friendly local business dedicated to serving our community. Get in touch to learn more about what we offer.",
        ),
    };
    Preset {
        tagline,
        description,
        menu_items: &[],
    }
}

/// Preset for a business type key, or the generic fallback for unknown keys.
pub fn preset_for(key: &str, voice: Voice) -> Preset {
    match BusinessType::from_key(key) {
        Some(business_type) => business_type.preset(voice),
        None => fallback(voice),
    }
}

/// A starter record for `key`: canned copy and menu filled in, identity and
/// contact fields left blank for the owner to complete.
pub fn sample_record(key: &str, voice: Voice) -> BusinessRecord {
    let preset = preset_for(key, voice);
    BusinessRecord {
        business_name: Some(String::new()),
        business_type: Some(key.to_string()),
        tagline: Some(preset.tagline.to_string()),
        short_description: Some(preset.description.to_string()),
        contact_whatsapp: Some(String::new()),
        instagram_handle: Some(String::new()),
        theme_choice: Some(voice.theme().as_str().to_string()),
        menu_items: Some(RawMenuItems::List(
            preset
                .menu_items
                .iter()
                .map(|(name, price)| RawMenuItem::new(*name, *price))
                .collect(),
        )),
    }
}
