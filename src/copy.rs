//! Copy pools and the page-facing selection API.
//!
//! All rotating copy lives here as compiled-in constants. Pages pick from
//! these pools through [`crate::variants`] using their route key, then fill
//! the `{token}` placeholders with page data via [`fill`].
//!
//! Recognized tokens: `{businessName}`, `{cityName}`, `{areaName}`,
//! `{serviceName}`, `{state}`, `{phone}`. Unknown tokens are left verbatim
//! in the output, so a typo shows up in the rendered page instead of
//! disappearing silently.
//!
//! Pool contents are append-only in spirit: adding, removing, or reordering
//! entries re-maps the key→variant selection for every page that draws from
//! that pool, which swaps published copy site-wide on the next build.

use crate::types::Faq;
use crate::variants;

/// Intro paragraphs for neighborhood landing pages.
pub const AREA_INTROS: &[&str] = &[
    "Homeowners in {areaName} have trusted {businessName} for over a decade of exterior work. From first estimate to final walkthrough, the same local crew sees your project through.",
    "{areaName} homes have their own mix of ages and styles, and we have worked on most of them. {businessName} brings the right materials and an honest schedule to every street in the neighborhood.",
    "When {areaName} homeowners need work done right, they call a crew that knows the neighborhood. {businessName} has been serving this part of {cityName} since day one.",
    "From quick repairs to full replacements, {businessName} covers {areaName} with local crews and straight answers. No call centers, no brokered-out jobs.",
    "{businessName} is the contractor {areaName} neighbors recommend to each other. Licensed, insured, and backed by a written workmanship warranty on every job.",
    "Your home in {areaName} deserves more than a drive-by quote. {businessName} walks every project in person and prices it in writing before work begins.",
];

/// Intro paragraphs for city hub pages.
pub const CITY_INTROS: &[&str] = &[
    "{businessName} has served {cityName} homeowners for years with licensed crews, quality materials, and schedules we actually keep.",
    "Looking for a contractor in {cityName}? {businessName} handles the job start to finish with local crews and a written warranty.",
    "{cityName} weather is hard on a house. {businessName} builds with materials and methods matched to the {state} climate, not a one-size catalogue.",
    "From estimate to cleanup, {businessName} keeps {cityName} projects on schedule and on budget. References available from your side of town.",
    "Hundreds of {cityName} homeowners have trusted {businessName} with their biggest investment. Read the reviews, then get your free estimate.",
];

/// Per-service blurbs shown on city pages and service pages.
pub const SERVICE_PITCHES: &[&str] = &[
    "Professional {serviceName} for {cityName} homes, done by crews who do this every day. Free estimates and a written workmanship warranty.",
    "{businessName} delivers {serviceName} across {cityName} with quality materials and no shortcuts. Most estimates are returned within 48 hours.",
    "Need {serviceName} in {cityName}? We scope the work in person, price it in writing, and stand behind it for five years.",
    "Our {serviceName} crews have completed hundreds of {cityName} projects. Clean job sites, clear schedules, honest pricing.",
    "{serviceName} is one of our core trades, not a sideline. {businessName} puts dedicated crews on every {cityName} project.",
];

/// Call-to-action lines for landing page footers.
pub const CTA_LINES: &[&str] = &[
    "Ready to get started? Book your free {areaName} estimate today.",
    "Get a free, no-obligation estimate for your home in {areaName}.",
    "Call {phone} or book online for a free estimate in {areaName}.",
    "Tell us about your project and get a free {areaName} estimate this week.",
];

/// Closing reassurance lines under the CTA.
pub const CLOSING_LINES: &[&str] = &[
    "{businessName} is licensed, bonded, and insured. Every project ends with a walkthrough and a written warranty.",
    "Local crews, quality materials, and a warranty in writing. That has been the {businessName} way from the start.",
    "Join the {cityName} homeowners who recommend {businessName} to their neighbors.",
    "One call covers it all: estimate, materials, scheduling, and cleanup by {businessName} crews.",
];

/// The FAQ pool: 16 question/answer pairs.
///
/// The size is load-bearing. Published pages draw their question subsets
/// by index into this pool, so growing or shrinking it re-deals questions
/// on every landing page at once.
pub const FAQ_POOL: &[(&str, &str)] = &[
    (
        "Do you offer free estimates in {areaName}?",
        "Yes. {businessName} provides free, no-obligation estimates throughout {cityName}, including {areaName}. Most quotes are delivered within 48 hours of the site visit.",
    ),
    (
        "Are you licensed and insured?",
        "{businessName} is fully licensed, bonded, and insured in {state}. We are happy to provide certificates of insurance before work begins.",
    ),
    (
        "How long does a typical project take?",
        "Most residential projects in {areaName} wrap up in three to ten working days depending on scope and weather. You get a written schedule before we start.",
    ),
    (
        "What brands and materials do you work with?",
        "We install contractor-grade materials from established manufacturers and will walk you through the options that fit the {cityName} climate and your budget.",
    ),
    (
        "Do your projects come with a warranty?",
        "Yes. Workmanship is covered for five years on top of the manufacturer warranties, and we put both in writing.",
    ),
    (
        "What does scheduling look like right now?",
        "Lead times in {cityName} vary by season. Book an estimate and we will give you a realistic start window up front.",
    ),
    (
        "Do you handle permits?",
        "We pull and manage any permits your project requires in {cityName} and schedule the inspections that go with them.",
    ),
    (
        "Can I see examples of your work near {areaName}?",
        "Yes. Ask during your estimate and we will share recent projects completed near {areaName}, with references on request.",
    ),
    (
        "How should I prepare for the crew's arrival?",
        "Clear vehicles from the driveway and move anything fragile away from the work zone. We cover landscaping and walk the site with you on day one.",
    ),
    (
        "Do you clean up after the job?",
        "Daily. Every {businessName} crew runs a magnetic sweep for fasteners and hauls away debris, so the site stays usable while work is underway.",
    ),
    (
        "Is financing available?",
        "We partner with third-party lenders for qualified homeowners. Ask for current terms when you book your estimate.",
    ),
    (
        "What happens if you find hidden damage?",
        "We stop, document it with photos, and price the fix before touching anything outside the agreed scope. No surprise charges.",
    ),
    (
        "Which payment methods do you accept?",
        "Check, card, and bank transfer. A deposit secures your start date and the balance is due on completion, after your walkthrough.",
    ),
    (
        "Do you work year-round in {cityName}?",
        "Yes. We schedule around the {cityName} wet season where the work demands it and will tell you honestly if a job should wait.",
    ),
    (
        "Who will actually be on site?",
        "Our own crews, led by a foreman who is your single point of contact. We do not broker jobs out to unknown subcontractors.",
    ),
    (
        "How do I get started?",
        "Call {phone} or book online. Tell us what you need in {areaName} and we will schedule a site visit that fits your week.",
    ),
];

/// Fill `{token}` placeholders in a copy template.
///
/// Replaces every occurrence of each `{name}` with its value. Tokens not
/// present in `vars` pass through unchanged.
pub fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in vars {
        out = out.replace(&format!("{{{name}}}"), value);
    }
    out
}

/// Select FAQ entries for a page, tagged with a section category.
///
/// Selection is keyed on the page's route key (see
/// [`variants::faq_indices`]); the returned templates still carry their
/// placeholders, callers fill them with page data.
pub fn faq_questions(key: &str, count: usize, category: &str) -> Vec<Faq> {
    variants::faq_indices(key, count, FAQ_POOL.len())
        .into_iter()
        .map(|idx| {
            let (question, answer) = FAQ_POOL[idx];
            Faq {
                question: question.to_string(),
                answer: answer.to_string(),
                category: category.to_string(),
            }
        })
        .collect()
}
