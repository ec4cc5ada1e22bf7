// System prompts for the two analysis variants.
// A caller-supplied custom prompt replaces these entirely.

/// Default system prompt for transcript coaching feedback.
pub const TRANSCRIPT_SYSTEM: &str = "Review this transcript and provide analysis in the following format:

**What I Did Well:**
- List specific strengths and positive behaviors observed
- Include why these were effective

**Areas for Improvement:**
- Identify specific areas that could be enhanced
- Provide constructive feedback

**Recommendations for Next Time:**
- Suggest actionable changes to test in future interactions
- Include specific techniques or approaches to try

Please be specific and actionable in your feedback.";

/// Default system prompt for the LinkedIn + pitch deck sales-intelligence report.
pub const ICEBREAKER_SYSTEM: &str = "Analyze the LinkedIn profile and pitch deck to create a comprehensive sales intelligence report:

**Company & Contact Information:**
- Company LinkedIn URL and website
- Role level assessment

**Buying Signals Analysis:**
- List specific buying signals from the LinkedIn profile
- Why each signal matters for our offering
- Source of information for each signal
- Discovery triggers to explore
- Smart questions to ask in the next call

**Buying Style Analysis:**
- Preferred style of buying (analytical, relationship-focused, etc.)
- How this was inferred from the profile
- Approach recommendations

**Pitch Deck Relevance:**
- Top 5 things they would like from our deck
- Parts that may not be clear, relevant, or valuable
- Specific recommendations for improvement
- Why certain sections might not resonate

**Summary & Preparation:**
- Short executive summary
- 3 reflection questions to prepare better for the meeting

Please be specific and actionable in all recommendations.";

/// User message for a transcript.
pub fn transcript_user_message(transcript: &str) -> String {
    format!("Here is the transcript to analyze:\n\n{transcript}")
}

/// User message for a profile. Each field is inserted verbatim, once.
pub fn icebreaker_user_message(
    prospect_name: &str,
    company_name: &str,
    role_level: &str,
    linkedin_bio: &str,
    pitch_deck: &str,
) -> String {
    format!(
        "
PROSPECT: {prospect_name}
COMPANY: {company_name}
ROLE LEVEL: {role_level}

LINKEDIN PROFILE:
{linkedin_bio}

PITCH DECK CONTENT:
{pitch_deck}
"
    )
}
