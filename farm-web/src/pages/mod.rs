pub mod admin;
pub mod auth;
pub mod chatbot;
pub mod crop_guide;
pub mod dashboard;
pub mod disease_detection;
pub mod home;
pub mod iot;
pub mod market_intelligence;
pub mod price_tracker;
pub mod profile;

pub use admin::AdminPage;
pub use auth::AuthPage;
pub use chatbot::ChatbotPage;
pub use crop_guide::CropGuidePage;
pub use dashboard::DashboardPage;
pub use disease_detection::DiseaseDetectionPage;
pub use home::HomePage;
pub use iot::IotPage;
pub use market_intelligence::MarketIntelligencePage;
pub use price_tracker::PriceTrackerPage;
pub use profile::ProfilePage;
