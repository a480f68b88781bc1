//! Application constants

pub const API_BASE: &str = "http://localhost:5000";

/// localStorage key holding the serialized session.
pub const SESSION_STORAGE_KEY: &str = "krishi_sahayak_session";

// Toast auto-expiry per notification kind (milliseconds)
pub const TOAST_SUCCESS_MS: u32 = 4000;
pub const TOAST_INFO_MS: u32 = 4000;
pub const TOAST_WARNING_MS: u32 = 6000;
pub const TOAST_ERROR_MS: u32 = 8000;

/// Indian states offered during signup.
pub const STATES: &[&str] = &[
    "Andhra Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Tamil Nadu",
    "Telangana",
    "Uttar Pradesh",
    "West Bengal",
];

/// Crops selectable as primary crops during signup.
pub const CROPS: &[&str] = &[
    "Wheat", "Rice", "Cotton", "Sugarcane", "Maize", "Bajra", "Jowar",
    "Barley", "Gram", "Arhar", "Moong", "Urad", "Mustard", "Groundnut",
    "Sesame", "Sunflower", "Soybean", "Potato", "Onion", "Tomato",
];

/// Quick-access crops on the price screens: (label, api value, icon).
pub const POPULAR_CROPS: &[(&str, &str, &str)] = &[
    ("Wheat", "wheat", "🌾"),
    ("Rice", "rice", "🌾"),
    ("Tomato", "tomato", "🍅"),
    ("Onion", "onion", "🧅"),
    ("Cotton", "cotton", "🌿"),
    ("Sugarcane", "sugarcane", "🎋"),
];

/// Mandi locations offered on the price tracker.
pub const LOCATIONS: &[&str] = &[
    "Delhi", "Mumbai", "Kolkata", "Chennai", "Bangalore", "Hyderabad",
    "Pune", "Ahmedabad", "Surat", "Jaipur", "Lucknow", "Kanpur",
];

/// Supported interface languages: (code, native name, english name).
pub const LANGUAGES: &[(&str, &str, &str)] = &[
    ("en", "English", "English"),
    ("hi", "हिंदी", "Hindi"),
    ("te", "తెలుగు", "Telugu"),
    ("ta", "தமிழ்", "Tamil"),
    ("bn", "বাংলা", "Bengali"),
    ("gu", "ગુજરાતી", "Gujarati"),
    ("mr", "मराठी", "Marathi"),
    ("pa", "ਪੰਜਾਬੀ", "Punjabi"),
];
