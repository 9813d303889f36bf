//! Page copy for the Aarambh 1.0 landing page.

pub const PHONE_PREFIX: &str = "+91";
pub const DESCRIPTION_MAX_CHARS: usize = 500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Rocket,
    Code,
    ClipboardList,
    Presentation,
    Trophy,
    TrendingUp,
    CheckCircle,
    Mic,
    Users,
    Mail,
    Phone,
    MapPin,
    Sun,
    Moon,
    ArrowRight,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Rocket => "🚀",
            Icon::Code => "</>",
            Icon::ClipboardList => "📋",
            Icon::Presentation => "📊",
            Icon::Trophy => "🏆",
            Icon::TrendingUp => "📈",
            Icon::CheckCircle => "✔",
            Icon::Mic => "🎤",
            Icon::Users => "👥",
            Icon::Mail => "✉",
            Icon::Phone => "☎",
            Icon::MapPin => "📍",
            Icon::Sun => "☀",
            Icon::Moon => "☾",
            Icon::ArrowRight => "→",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineStep {
    pub day: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const TIMELINE_STEPS: [TimelineStep; 4] = [
    TimelineStep {
        day: "Day 1",
        title: "Idea Submission",
        description: "Kickoff briefing and team formation",
        icon: Icon::Rocket,
    },
    TimelineStep {
        day: "Day 2-5",
        title: "MVP / Prototype Building",
        description: "Intensive development with mentor guidance",
        icon: Icon::Code,
    },
    TimelineStep {
        day: "Day 6",
        title: "Pre-Demo Day",
        description: "QnA session and test your prototype with live user pole",
        icon: Icon::ClipboardList,
    },
    TimelineStep {
        day: "Day 7",
        title: "Demo Day",
        description: "7-min pitch + 2-3 min Q&A per team",
        icon: Icon::Presentation,
    },
];

pub const FEATURES: [Feature; 6] = [
    Feature {
        title: "All Resources Provided",
        description: "Everything you need to build your prototype fast",
        icon: Icon::Trophy,
    },
    Feature {
        title: "Expert Mentorship",
        description: "Guidance from industry veterans and successful founders",
        icon: Icon::TrendingUp,
    },
    Feature {
        title: "MVP Validation",
        description: "Validate your prototype with real users and feedback",
        icon: Icon::CheckCircle,
    },
    Feature {
        title: "Investor Pitch",
        description: "Present to investors and industry judges",
        icon: Icon::Mic,
    },
    Feature {
        title: "Certificates & Accolade",
        description: "Certificates and awards for top 3 performing teams",
        icon: Icon::Trophy,
    },
    Feature {
        title: "Community access",
        description: "A lifelong community to be accessed of other startups, investors, mentors, resources",
        icon: Icon::Users,
    },
];

pub const FAQS: [Faq; 6] = [
    Faq {
        question: "Who can apply to FounderSmith?",
        answer: "Anyone with an idea can apply! We welcome students, working professionals, and aspiring entrepreneurs. You can apply as a solo founder or with a team.",
    },
    Faq {
        question: "Is there any participation fee?",
        answer: "Yes, FounderSmith would ask for a small participation fee. We provide all resources, mentorship, and network access at no cost to the participants.",
    },
    Faq {
        question: "What kind of ideas are we looking for?",
        answer: "We're open to all kinds of ideas - tech, non-tech, or combined. We value clarity, innovation, and the potential for impact. Your idea should solve a real problem.",
    },
    Faq {
        question: "What happens after the 7 days?",
        answer: "Top performing teams get access to investor networks, continued mentorship, and potential funding opportunities. All participants join our alumni network.",
    },
    Faq {
        question: "Can I participate remotely?",
        answer: "AARAMBH 1.0 is an in-person event to maximize collaboration and networking. Remote participation is not available for this cohort.",
    },
    Faq {
        question: "What's the selection criteria?",
        answer: "We evaluate applications based on idea clarity, problem-solution fit, team capability, and commitment level. A diverse cohort is selected to foster cross-pollination of ideas.",
    },
];

pub const TERMS: [&str; 8] = [
    "Participant selection is subject to review by the FounderSmith screening committee",
    "Participant should carry their own laptops to build the MVP",
    "Participation does not guarantee funding or investment",
    "Event schedule and mentors may change based on availability",
    "Teams must follow timelines and program guidelines",
    "Intellectual Property (IP) remains with participants",
    "FounderSmith may use event photos/videos for promotional purposes",
    "Any misconduct may lead to disqualification",
];

pub const DOMAINS: [&str; 11] = [
    "FinTech",
    "HealthTech",
    "EdTech",
    "E-commerce",
    "SaaS",
    "AI/ML",
    "IoT",
    "CleanTech",
    "AgriTech",
    "Social Impact",
    "Other",
];

pub struct ContactInfo {
    pub email: &'static str,
    pub phone_href: &'static str,
    pub phone_display: &'static str,
    pub location: &'static str,
}

pub const CONTACT: ContactInfo = ContactInfo {
    email: "business@foundersmith.in",
    phone_href: "tel:+918017421072",
    phone_display: "+91 8017421072 / +91 7060593172",
    location: "India",
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn domains_are_unique_and_end_with_other() {
        let unique: HashSet<_> = DOMAINS.iter().collect();
        assert_eq!(unique.len(), DOMAINS.len());
        assert_eq!(DOMAINS.last(), Some(&"Other"));
    }

    #[test]
    fn timeline_days_are_distinct() {
        // day labels double as render keys
        let days: HashSet<_> = TIMELINE_STEPS.iter().map(|s| s.day).collect();
        assert_eq!(days.len(), TIMELINE_STEPS.len());
    }

    #[test]
    fn feature_titles_are_distinct() {
        let titles: HashSet<_> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(titles.len(), FEATURES.len());
    }

    #[test]
    fn copy_is_never_blank() {
        assert!(FAQS.iter().all(|f| !f.question.is_empty() && !f.answer.is_empty()));
        assert!(TERMS.iter().all(|t| !t.trim().is_empty()));
    }
}
