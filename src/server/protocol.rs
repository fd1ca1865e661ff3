use serde::{Deserialize, Serialize};

use crate::classes::ClassInfo;

/// Successful prediction: the three table entries for the predicted class
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PredictionResponse {
    pub prediction: String,
    pub disease_name: String,
    pub remedy: String,
}

impl From<ClassInfo> for PredictionResponse {
    fn from(info: ClassInfo) -> Self {
        PredictionResponse {
            prediction: info.label.to_owned(),
            disease_name: info.disease_name.to_owned(),
            remedy: info.remedy.to_owned(),
        }
    }
}

/// Any failed request
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
