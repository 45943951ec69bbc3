mod settings;

pub use settings::{
    LoggingSettings, RecognizerProviderSetting, RecognizerSettings, SentimentProviderSetting,
    SentimentSettings, ServerSettings, Settings,
};
