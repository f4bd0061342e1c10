use neowatch_core::{NeoRecord, RiskLevel, Tone};

/// Audience register for the explainer briefing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    KidFriendly,
    CollegeStudent,
    Professional,
}

impl Audience {
    fn as_str(self) -> &'static str {
        match self {
            Self::KidFriendly => "kid friendly",
            Self::CollegeStudent => "college student level",
            Self::Professional => "professional",
        }
    }
}

/// Briefing prompt for a single record: a science-communicator persona, the
/// record's numbers at fixed precision, and the canonical risk label.
pub fn explainer_prompt(record: &NeoRecord, audience: Audience, location: Option<&str>) -> String {
    let loc_text = location
        .map(str::trim)
        .filter(|loc| !loc.is_empty())
        .unwrap_or("Earth in general");
    let risk_label = RiskLevel::from_score(record.risk_score).label(Tone::Plain);

    format!(
        "You are an expert NASA science communicator.\n\
         Explain the real-world risk of this near-Earth asteroid to a {audience} audience\n\
         in clear, accurate, and calm language.\n\
         \n\
         Asteroid data:\n\
         - Name: {name}\n\
         - Close approach date: {date}\n\
         - Estimated diameter (km): {diameter:.3}\n\
         - Miss distance (lunar distances): {miss_lunar:.3}\n\
         - Miss distance (km): {miss_km:.0}\n\
         - Relative velocity (km/s): {velocity:.2}\n\
         - Flagged as potentially hazardous by NASA NeoWs: {hazardous}\n\
         - Computed risk score (0-100): {risk_score:.1}\n\
         - Risk label: {risk_label}\n\
         \n\
         Location of interest: {loc_text}\n\
         \n\
         In your explanation, please:\n\
         1. Describe how close this really is using everyday comparisons (for example, compare to the distance to the Moon).\n\
         2. Explain what the risk score and risk label actually mean for people on Earth.\n\
         3. Clearly state whether there is any known impact threat right now based on this data.\n\
         4. Avoid sensational language. Be calm, realistic, and reassuring if the risk is low.\n\
         \n\
         Length: about 100-150 words.\n",
        audience = audience.as_str(),
        name = record.name,
        date = record.date,
        diameter = record.avg_diameter_km,
        miss_lunar = record.miss_distance_lunar,
        miss_km = record.miss_distance_km,
        velocity = record.relative_velocity_km_s,
        hazardous = record.is_potentially_hazardous,
        risk_score = record.risk_score,
    )
}

const CHAT_SYSTEM_INSTRUCTIONS: &str = "\
You are NeoAstroBot, a helpful assistant that explains near-Earth asteroids.
Use ONLY the asteroid data provided to you.
Do NOT invent specific impact predictions or guaranteed collisions.
If the risk appears low, reassure the user calmly and avoid sensational language.
If a question cannot be answered from the data, say so politely.";

/// Chat turn prompt: system instructions, the bounded record digest, the
/// transcript so far, then the new question. The digest is the model's whole
/// view of the data; it never sees the raw feed.
pub fn chat_prompt(asteroid_summary: &str, chat_history: &str, user_message: &str) -> String {
    format!(
        "{CHAT_SYSTEM_INSTRUCTIONS}\n\
         \n\
         ASTEROID DATA (from NASA NeoWs and a custom risk score 0-100):\n\
         {asteroid_summary}\n\
         \n\
         CONVERSATION SO FAR:\n\
         {chat_history}\n\
         \n\
         USER QUESTION:\n\
         {user_message}\n\
         \n\
         NeoAstroBot, please respond in a clear paragraph or short list suitable for a general audience.\n"
    )
}
