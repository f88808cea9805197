use crate::AnalysisPayload;

use serde::{Deserialize, Serialize};

/// The analysis payloads attached to a journal entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredFields {
    pub facial_analysis: Option<AnalysisPayload>,
    pub mood_factors: Option<AnalysisPayload>,
    pub wellness_indicators: Option<AnalysisPayload>,
    pub recommendations: Option<AnalysisPayload>,
    pub quick_insight: Option<AnalysisPayload>,
    pub detailed_insights: Option<AnalysisPayload>,
    pub mood_trends: Option<AnalysisPayload>,
    pub chart_data: Option<AnalysisPayload>,
    pub analysis_summary: Option<AnalysisPayload>,
    pub additional_data: Option<AnalysisPayload>,
}

impl StructuredFields {
    /// Column names, in storage order
    pub const FIELD_NAMES: [&'static str; 10] = [
        "facial_analysis",
        "mood_factors",
        "wellness_indicators",
        "recommendations",
        "quick_insight",
        "detailed_insights",
        "mood_trends",
        "chart_data",
        "analysis_summary",
        "additional_data",
    ];

    /// Mutable slot for a field name, `None` for unknown names
    pub fn slot_mut(&mut self, name: &str) -> Option<&mut Option<AnalysisPayload>> {
        let slot = match name {
            "facial_analysis" => &mut self.facial_analysis,
            "mood_factors" => &mut self.mood_factors,
            "wellness_indicators" => &mut self.wellness_indicators,
            "recommendations" => &mut self.recommendations,
            "quick_insight" => &mut self.quick_insight,
            "detailed_insights" => &mut self.detailed_insights,
            "mood_trends" => &mut self.mood_trends,
            "chart_data" => &mut self.chart_data,
            "analysis_summary" => &mut self.analysis_summary,
            "additional_data" => &mut self.additional_data,
            _ => return None,
        };
        Some(slot)
    }

    /// Fields paired with their column names, in storage order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Option<&AnalysisPayload>)> {
        let values = [
            self.facial_analysis.as_ref(),
            self.mood_factors.as_ref(),
            self.wellness_indicators.as_ref(),
            self.recommendations.as_ref(),
            self.quick_insight.as_ref(),
            self.detailed_insights.as_ref(),
            self.mood_trends.as_ref(),
            self.chart_data.as_ref(),
            self.analysis_summary.as_ref(),
            self.additional_data.as_ref(),
        ];
        Self::FIELD_NAMES.into_iter().zip(values)
    }
}
