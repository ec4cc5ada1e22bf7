//! Locally generated analysis used whenever the model call fails.

use crate::analysis::AnalysisRequest;

/// Marker line that closes every fallback text.
pub const FALLBACK_NOTICE: &str = "AI analysis temporarily unavailable";

const TRANSCRIPT_FALLBACK_BODY: &str = "**Analysis Complete**

**What Went Well:**
- Clear communication observed in the transcript
- Professional tone maintained throughout
- Key points were addressed

**Areas for Improvement:**
- Consider more structured approach to discussions
- Opportunity for better question flow
- Could benefit from more active listening techniques

**Recommendations:**
- Practice summarizing key points at regular intervals
- Ask more follow-up questions to deepen understanding
- Use pause techniques to allow for better responses";

/// Renders the fallback for a request, interpolating whatever structured
/// fields it carries.
pub fn fallback_text(request: &AnalysisRequest<'_>) -> String {
    match request {
        AnalysisRequest::Transcript { .. } => format!(
            "{TRANSCRIPT_FALLBACK_BODY}\n\n*Note: {FALLBACK_NOTICE}, this is a basic assessment.*"
        ),
        AnalysisRequest::Profile(profile) => icebreaker_fallback(
            profile.prospect_name,
            profile.company_name,
            profile.role_level,
        ),
    }
}

fn icebreaker_fallback(prospect_name: &str, company_name: &str, role_level: &str) -> String {
    let role_lower = role_level.to_lowercase();
    format!(
        "**LinkedIn Icebreaker Analysis for {prospect_name}**

**Company & Contact Information:**
- Company: {company_name}
- Role Level: {role_level}
- Requires manual research for LinkedIn URL and website

**Buying Signals Analysis:**
- Professional background suggests interest in business solutions
- Company size and role indicate decision-making capability
- Recent activity may show openness to new technologies

**Buying Style Assessment:**
- Appears to be a {role_lower} decision maker
- Likely values data-driven presentations
- May prefer structured, professional approach

**Pitch Deck Recommendations:**
- Focus on ROI and business impact
- Include relevant case studies
- Prepare for detailed technical questions
- Emphasize scalability and implementation

**Meeting Preparation:**
- Research recent company news and challenges
- Prepare specific use cases relevant to their industry
- Plan follow-up questions about their current processes

**Reflection Questions:**
1. What specific challenges is {company_name} likely facing in their industry?
2. How can our solution directly address their business objectives?
3. What would be the most compelling ROI story for this prospect?

*Note: {FALLBACK_NOTICE}, this is a basic assessment based on provided information.*"
    )
}
