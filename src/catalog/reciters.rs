//! Static table of reciters

use super::types::Reciter;

pub static RECITERS: [Reciter; 5] = [
    Reciter {
        id: "sudais",
        display_name: "Abdul Rahman Al-Sudais",
        primary_folder_key: "abdurrahmaan_as-sudays",
        fallback_server_base: Some("https://server11.mp3quran.net"),
        fallback_folder_key: Some("sds"),
    },
    Reciter {
        id: "mishary",
        display_name: "Mishary Rashid Alafasy",
        primary_folder_key: "mishaari_raashid_al_3afaasee",
        fallback_server_base: Some("https://server8.mp3quran.net"),
        fallback_folder_key: Some("afs"),
    },
    Reciter {
        id: "ghamdi",
        display_name: "Saad Al-Ghamdi",
        primary_folder_key: "sa3d_al-ghaamidi/complete",
        fallback_server_base: Some("https://server7.mp3quran.net"),
        fallback_folder_key: Some("s_gmd"),
    },
    Reciter {
        id: "basit",
        display_name: "Abdul Basit Abdul Samad",
        primary_folder_key: "abdul_basit_murattal",
        fallback_server_base: Some("https://server7.mp3quran.net"),
        fallback_folder_key: Some("basit"),
    },
    Reciter {
        id: "husary",
        display_name: "Mahmoud Khalil Al-Husary",
        primary_folder_key: "mahmood_khaleel_al-husaree",
        fallback_server_base: None,
        fallback_folder_key: None,
    },
];
