use serde::Serialize;

use super::Language;

/// Localized feedback strings for one language
#[derive(Debug, Clone)]
pub struct FeedbackTemplates {
    pub confidence_high: &'static str,
    pub confidence_medium: &'static str,
    pub confidence_low: &'static str,
    /// Contains one `{}` placeholder for the list of detected fillers
    pub filler_words_feedback: &'static str,
    pub hesitation_feedback: &'static str,
    pub repetition_feedback: &'static str,
}

/// Localized labels passed through the report for presentation
#[derive(Debug, Clone, Serialize)]
pub struct ReportLabels {
    pub analysis_summary: &'static str,
    pub speech_markers: &'static str,
    pub areas_to_improve: &'static str,
    pub recommendations: &'static str,
    pub hesitations: &'static str,
    pub repetitions: &'static str,
    pub filler_count: &'static str,
}

static ENGLISH_TEMPLATES: FeedbackTemplates = FeedbackTemplates {
    confidence_high: "Excellent speech! Very confident delivery.",
    confidence_medium: "Good speech with room for improvement.",
    confidence_low: "Your speech needs more practice for confidence.",
    filler_words_feedback: "Try to reduce filler words like: {}",
    hesitation_feedback: "Work on reducing hesitations in your speech",
    repetition_feedback: "Avoid repeating words frequently",
};

static ENGLISH_LABELS: ReportLabels = ReportLabels {
    analysis_summary: "Analysis Summary",
    speech_markers: "Speech Markers",
    areas_to_improve: "Areas to improve:",
    recommendations: "Recommendations:",
    hesitations: "Hesitations",
    repetitions: "Repetitions",
    filler_count: "Filler Words",
};

static TELUGU_TEMPLATES: FeedbackTemplates = FeedbackTemplates {
    confidence_high: "అద్భుతమైన ప్రసంగం! చాలా ఆత్మవిశ్వాసంతో ఉంది.",
    confidence_medium: "మంచి ప్రసంగం, కానీ మెరుగుపరచుకోవలసిన అవకాశం ఉంది.",
    confidence_low: "ఆత్మవిశ్వాసం పెంచుకోవడానికి మరింత అభ్యాసం అవసరం.",
    filler_words_feedback: "ఈ పదాలు తగ్గించండి: {}",
    hesitation_feedback: "ఆగి ఆగి మాట్లాడటం తగ్గించండి",
    repetition_feedback: "పదాలను పదే పదే పునరావృతం చేయవద్దు",
};

static TELUGU_LABELS: ReportLabels = ReportLabels {
    analysis_summary: "విశ్లేషణ సారాంశం",
    speech_markers: "ప్రసంగ విశేషాలు",
    areas_to_improve: "మెరుగుపరచవలసిన అంశాలు:",
    recommendations: "సూచనలు:",
    hesitations: "ఆగడాలు",
    repetitions: "పునరావృతాలు",
    filler_count: "అనవసర పదాలు",
};

static HINDI_TEMPLATES: FeedbackTemplates = FeedbackTemplates {
    confidence_high: "बहुत बढ़िया भाषण! बहुत आत्मविश्वास के साथ।",
    confidence_medium: "अच्छा भाषण, लेकिन सुधार की गुंजाइश है।",
    confidence_low: "आत्मविश्वास बढ़ाने के लिए और अभ्यास की आवश्यकता है।",
    filler_words_feedback: "इन शब्दों का प्रयोग कम करें: {}",
    hesitation_feedback: "हिचकिचाहट को कम करें",
    repetition_feedback: "शब्दों की पुनरावृत्ति से बचें",
};

static HINDI_LABELS: ReportLabels = ReportLabels {
    analysis_summary: "विश्लेषण सारांश",
    speech_markers: "भाषण के चिह्न",
    areas_to_improve: "सुधार के क्षेत्र:",
    recommendations: "सुझाव:",
    hesitations: "हिचकिचाहट",
    repetitions: "पुनरावृत्तियां",
    filler_count: "फिलर शब्द",
};

/// Look up the feedback templates for a language
pub fn templates_for(language: Language) -> &'static FeedbackTemplates {
    match language {
        Language::English => &ENGLISH_TEMPLATES,
        Language::Telugu => &TELUGU_TEMPLATES,
        Language::Hindi => &HINDI_TEMPLATES,
    }
}

/// Look up the presentation labels for a language
pub fn labels_for(language: Language) -> &'static ReportLabels {
    match language {
        Language::English => &ENGLISH_LABELS,
        Language::Telugu => &TELUGU_LABELS,
        Language::Hindi => &HINDI_LABELS,
    }
}
