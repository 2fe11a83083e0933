//! Example certificates written by ledger initialization.

use crate::certificate::{Artist, Certificate};

fn artist(id: &str, name: &str, date_of_birth: &str) -> Artist {
    Artist {
        id: id.to_string(),
        name: name.to_string(),
        date_of_birth: date_of_birth.to_string(),
    }
}

/// The fixed seed set, in write order.
pub fn seed_certificates() -> Vec<Certificate> {
    vec![
        Certificate {
            id: "8989s1gjJJHJKHJSGHJDJSAD871238S".to_string(),
            photo_uri: "https://images.unsplash.com/photo-1571115764595-644a1f56a55c?ixid=MnwxMjA3fDB8MHxzZWFyY2h8NHx8cGFpbnRpbmd8ZW58MHx8MHx8&ixlib=rb-1.2.1&w=1000&q=80".to_string(),
            title: "original-splash-abstract".to_string(),
            owner: "Tomoko Janra".to_string(),
            year_of_production: 1962,
            artist: artist("id-13894047849", "Tomoko Janra", "20.11.1980"),
        },
        Certificate {
            id: "HDFSJ52151511113GHJDJSAD8712389".to_string(),
            photo_uri: "https://ii1.pepperfry.com/media/catalog/product/o/r/568x625/original-handmade-couple-together-oil-painting-on-canvas-by-gallery99-original-handmade-couple-toget-g9u0rd.jpg".to_string(),
            title: "original-handmade-couple-toget".to_string(),
            owner: "Eyas Jaber".to_string(),
            year_of_production: 1977,
            artist: artist("id-13894047849", "Mayer Labor", "17.11.1971"),
        },
        Certificate {
            id: "34890DFASHJK148904KLOJKUKOP41IO4".to_string(),
            photo_uri: "https://www.terrain.org/articles/27/fullsize/15_fs.jpg".to_string(),
            title: "original-piano-farm.".to_string(),
            owner: "Sebastian Michel".to_string(),
            year_of_production: 1990,
            artist: artist("id-13899810498", "Jubran Jubran", "17.05.1965"),
        },
        Certificate {
            id: "JFKLHJKGHFAK87419FADSHJLgdf4hjaj1".to_string(),
            photo_uri: "https://qph.fs.quoracdn.net/main-qimg-a7cbe92701920a2155718c76c58c7c52".to_string(),
            title: "british-guards".to_string(),
            owner: "Monde Cardino".to_string(),
            year_of_production: 2017,
            artist: artist("id-13899810498", "Jubran Jubran", "17.07.1960"),
        },
    ]
}
