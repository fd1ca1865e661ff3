//! The static class tables the classifier's output indexes into.
//!
//! All three tables share `NUM_CLASSES`, so a length drift between them is a
//! compile error rather than an out-of-range lookup at serving time.

/// Number of classes the model was trained on
pub const NUM_CLASSES: usize = 42;

/// Symbolic class labels, in model output order
pub const CLASS_LABELS: [&str; NUM_CLASSES] = [
    "Class0", "Class1", "Class2", "Class3", "Class4", "Class5", "Class6", "Class7", "Class8",
    "Class9", "Class10", "Class11", "Class12", "Class13", "Class14", "Class15", "Class16",
    "Class17", "Class18", "Class19", "Class20", "Class21", "Class22", "Class23", "Class24",
    "Class25", "Class26", "Class27", "Class28", "Class29", "Class30", "Class31", "Class32",
    "Class33", "Class34", "Class35", "Class36", "Class37", "Class38", "Class39", "Class40",
    "Class41",
];

/// Display disease names corresponding to the class labels
pub const DISEASE_NAMES: [&str; NUM_CLASSES] = [
    "Healthy",
    "Powdery Mildew",
    "Leaf Spot",
    "Blight",
    "Rust",
    "Mosaic Virus",
    "Anthracnose",
    "Canker",
    "Scab",
    "Wilt",
    "Root Rot",
    "Leaf Curl",
    "Downy Mildew",
    "Gray Mold",
    "Black Spot",
    "Yellowing",
    "Bacterial Spot",
    "Fusarium Wilt",
    "Verticillium Wilt",
    "Leaf Blight",
    "Leaf Scorch",
    "Leaf Rust",
    "Leaf Miner",
    "Leafhopper Damage",
    "Spider Mite Damage",
    "Aphid Damage",
    "Whitefly Damage",
    "Thrip Damage",
    "Mealybug Damage",
    "Scale Damage",
    "Nematode Damage",
    "Virus",
    "Fungus",
    "Bacteria",
    "Nutrient Deficiency",
    "Overwatering",
    "Underwatering",
    "Heat Stress",
    "Cold Stress",
    "Chemical Burn",
    "Physical Damage",
    "Unknown Disease",
];

/// Remedies corresponding to the class labels
pub const REMEDIES: [&str; NUM_CLASSES] = [
    "No action needed. The plant is healthy.",
    "Apply fungicide and ensure proper air circulation.",
    "Remove affected leaves and apply fungicide.",
    "Apply fungicide and avoid overhead watering.",
    "Apply fungicide and remove infected leaves.",
    "Remove infected plants and control aphids.",
    "Apply fungicide and remove infected plant parts.",
    "Prune affected branches and apply fungicide.",
    "Apply fungicide and ensure proper spacing.",
    "Improve drainage and avoid overwatering.",
    "Improve soil drainage and apply fungicide.",
    "Control whiteflies and apply insecticide.",
    "Apply fungicide and avoid overhead watering.",
    "Remove affected plant parts and apply fungicide.",
    "Apply fungicide and ensure proper air circulation.",
    "Check soil pH and nutrient levels.",
    "Apply copper-based fungicide.",
    "Remove infected plants and improve soil drainage.",
    "Remove infected plants and improve soil drainage.",
    "Apply fungicide and remove affected leaves.",
    "Ensure adequate watering and shade.",
    "Apply fungicide and remove infected leaves.",
    "Apply insecticide and remove affected leaves.",
    "Apply insecticide and remove affected leaves.",
    "Apply miticide and increase humidity.",
    "Apply insecticide and remove affected leaves.",
    "Apply insecticide and use yellow sticky traps.",
    "Apply insecticide and remove affected leaves.",
    "Apply insecticide and remove affected leaves.",
    "Apply insecticide and remove affected leaves.",
    "Remove infected plants and control nematodes.",
    "Remove infected plants and control vectors.",
    "Apply fungicide and improve air circulation.",
    "Apply bactericide and remove infected parts.",
    "Adjust fertilization and soil pH.",
    "Reduce watering frequency and improve drainage.",
    "Increase watering frequency and ensure proper drainage.",
    "Provide shade and increase watering.",
    "Protect plants from frost and cold winds.",
    "Flush soil with water and avoid over-fertilization.",
    "Remove damaged parts and protect plants.",
    "Consult an expert for diagnosis and treatment.",
];

/// The three table entries for one class index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassInfo {
    pub label: &'static str,
    pub disease_name: &'static str,
    pub remedy: &'static str,
}

/// Look up a predicted class index in all three tables
pub fn lookup(index: usize) -> Option<ClassInfo> {
    if index >= NUM_CLASSES {
        return None;
    }
    Some(ClassInfo {
        label: CLASS_LABELS[index],
        disease_name: DISEASE_NAMES[index],
        remedy: REMEDIES[index],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_first_class() {
        let info = lookup(0).unwrap();
        assert_eq!(info.label, "Class0");
        assert_eq!(info.disease_name, "Healthy");
        assert_eq!(info.remedy, "No action needed. The plant is healthy.");
    }

    #[test]
    fn test_lookup_last_class() {
        let info = lookup(NUM_CLASSES - 1).unwrap();
        assert_eq!(info.label, "Class41");
        assert_eq!(info.disease_name, "Unknown Disease");
        assert_eq!(info.remedy, "Consult an expert for diagnosis and treatment.");
    }

    #[test]
    fn test_lookup_out_of_bounds() {
        assert!(lookup(NUM_CLASSES).is_none());
        assert!(lookup(usize::MAX).is_none());
    }

    #[test]
    fn test_labels_match_index() {
        for (i, label) in CLASS_LABELS.iter().enumerate() {
            assert_eq!(*label, format!("Class{i}"));
        }
    }
}
