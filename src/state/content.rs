//! Static copy for the home, plans and contact pages

/// A pricing tier
#[derive(Debug, Clone, Copy)]
pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
}

/// A subject with the topics covered
#[derive(Debug, Clone, Copy)]
pub struct SubjectOffering {
    pub name: &'static str,
    pub icon: &'static str,
    pub summary: &'static str,
    pub topics: &'static [&'static str],
}

/// Title and one-line description
#[derive(Debug, Clone, Copy)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ContactChannel {
    pub title: &'static str,
    pub details: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const HERO_TITLE: &str = "Master Science with Expert Online Tutoring";
pub const HERO_SUBTITLE: &str = "Professional tutoring in Mathematics, Physics, and Chemistry. \
Get personalized lessons that help you excel in your studies.";

// Page introductions

pub const PLANS_INTRO: &str = "Choose the perfect plan for your learning journey. \
All plans include expert tutoring in Mathematics, Physics, and Chemistry.";
pub const VIDEOS_INTRO: &str = "Access our library of free educational content covering \
Mathematics, Physics, and Chemistry. Perfect for self-study and exam preparation.";
pub const REGISTER_INTRO: &str =
    "Join our online tutoring program and start your journey to academic excellence";
pub const UPLOAD_INTRO: &str = "Share your knowledge with students by uploading educational \
videos. These will be available for free to help students learn.";
pub const CONTACT_INTRO: &str = "Have questions about tutoring or need help with your studies? \
I'm here to help! Reach out through any of the methods below.";

pub const PLANS: &[Plan] = &[
    Plan {
        name: "Basic Plan",
        price: "$30",
        period: "per hour",
        description: "Perfect for occasional help and homework assistance",
        features: &[
            "1-on-1 online tutoring sessions",
            "Flexible scheduling",
            "Email support",
            "Homework help",
            "Basic progress tracking",
            "Session recordings available",
        ],
        popular: false,
    },
    Plan {
        name: "Standard Plan",
        price: "$50",
        period: "per session (1.5 hours)",
        description: "Most popular choice for regular tutoring and exam prep",
        features: &[
            "Extended 1.5-hour sessions",
            "Priority scheduling",
            "Email & phone support",
            "Customized study materials",
            "Detailed progress reports",
            "Exam preparation strategies",
            "Free makeup sessions",
            "WhatsApp support",
        ],
        popular: true,
    },
    Plan {
        name: "Premium Plan",
        price: "$200",
        period: "per month (4 sessions)",
        description: "Comprehensive tutoring package for serious students",
        features: &[
            "4 sessions per month (1.5 hours each)",
            "Priority booking",
            "24/7 support access",
            "Personalized study plan",
            "Weekly progress reviews",
            "Unlimited practice materials",
            "Parent progress meetings",
            "College admission guidance",
            "Free additional resources",
        ],
        popular: false,
    },
];

pub const OFFERINGS: &[SubjectOffering] = &[
    SubjectOffering {
        name: "Mathematics",
        icon: "📐",
        summary: "Algebra, Calculus, Geometry, Statistics",
        topics: &[
            "Algebra",
            "Calculus",
            "Geometry",
            "Statistics",
            "Trigonometry",
            "Linear Algebra",
        ],
    },
    SubjectOffering {
        name: "Physics",
        icon: "⚛️",
        summary: "Mechanics, Thermodynamics, Optics, Quantum",
        topics: &[
            "Mechanics",
            "Thermodynamics",
            "Optics",
            "Electricity & Magnetism",
            "Modern Physics",
            "Quantum Physics",
        ],
    },
    SubjectOffering {
        name: "Chemistry",
        icon: "🧪",
        summary: "Organic, Inorganic, Physical Chemistry",
        topics: &[
            "Organic Chemistry",
            "Inorganic Chemistry",
            "Physical Chemistry",
            "Analytical Chemistry",
            "Biochemistry",
        ],
    },
];

/// Levels every subject is offered at
pub const OFFERED_LEVELS: &[&str] = &["Grade 9-12", "College Level", "University Level"];

pub const HOME_FEATURES: &[Highlight] = &[
    Highlight {
        title: "Personalized Learning",
        description: "One-on-one tutoring tailored to your needs",
    },
    Highlight {
        title: "Flexible Scheduling",
        description: "Learn at your own pace and convenience",
    },
    Highlight {
        title: "Expert Tutor",
        description: "Professional science tutor with years of experience",
    },
    Highlight {
        title: "Free Resources",
        description: "Access to educational videos and materials",
    },
];

pub const PLAN_BENEFITS: &[Highlight] = &[
    Highlight {
        title: "Flexible Scheduling",
        description: "Book sessions at times that work for you, including evenings and weekends",
    },
    Highlight {
        title: "Personalized Learning",
        description: "Customized lessons based on your learning style and academic goals",
    },
    Highlight {
        title: "Expert Instruction",
        description: "Learn from an experienced tutor with expertise in all science subjects",
    },
    Highlight {
        title: "Comprehensive Materials",
        description: "Access to study guides, practice problems, and additional resources",
    },
];

pub const VIDEO_TIPS: &[Highlight] = &[
    Highlight {
        title: "Take Notes",
        description: "Write down key concepts and formulas as you watch. Active note-taking improves retention.",
    },
    Highlight {
        title: "Practice Problems",
        description: "After watching, solve related problems to reinforce your understanding.",
    },
    Highlight {
        title: "Pause and Review",
        description: "Don't hesitate to pause and replay sections you find challenging.",
    },
    Highlight {
        title: "Ask Questions",
        description: "If you need clarification, feel free to contact me for personalized help.",
    },
];

pub const UPLOAD_GUIDELINES: &[&str] = &[
    "Ensure video quality is clear and audio is audible",
    "Keep videos focused on specific topics for better learning",
    "Include relevant examples and step-by-step explanations",
    "Videos should be educational and appropriate for students",
    "Maximum file size is 100MB per video",
];

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        title: "Email",
        details: "tutor@sciencehelp.com",
        description: "Send me an email and I'll respond within 24 hours",
    },
    ContactChannel {
        title: "Phone",
        details: "+1 (555) 123-4567",
        description: "Call or text for urgent questions",
    },
    ContactChannel {
        title: "Office Hours",
        details: "Mon-Fri: 9 AM - 7 PM",
        description: "Available for calls and video consultations",
    },
    ContactChannel {
        title: "Location",
        details: "Online Tutoring",
        description: "Serving students worldwide via video calls",
    },
];

pub const FAQS: &[Faq] = &[
    Faq {
        question: "How do I schedule a tutoring session?",
        answer: "After registering, I'll contact you within 24 hours to discuss your needs and schedule your first session at a convenient time.",
    },
    Faq {
        question: "What subjects do you teach?",
        answer: "I specialize in Mathematics, Physics, and Chemistry for grade 9-12 and college level students.",
    },
    Faq {
        question: "How are sessions conducted?",
        answer: "All sessions are conducted online via video call. I use interactive whiteboards and screen sharing for effective learning.",
    },
    Faq {
        question: "Do you offer group sessions?",
        answer: "Yes, I offer both individual and small group sessions (2-4 students) at discounted rates.",
    },
    Faq {
        question: "What if I need to cancel a session?",
        answer: "You can cancel or reschedule sessions with at least 24 hours notice without any penalty.",
    },
];

/// Steps listed after a successful registration
pub const REGISTRATION_NEXT_STEPS: &[&str] = &[
    "I'll review your learning goals and subject preferences",
    "Schedule a free 15-minute consultation call",
    "Create a personalized tutoring plan for you",
    "Send you the first lesson materials",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_popular_plan() {
        let popular: Vec<_> = PLANS.iter().filter(|p| p.popular).collect();
        assert_eq!(popular.len(), 1);
        assert_eq!(popular[0].name, "Standard Plan");
    }

    #[test]
    fn test_offerings_match_form_subjects() {
        let names: Vec<_> = OFFERINGS.iter().map(|o| o.name).collect();
        let form_subjects: Vec<_> = crate::state::SUBJECTS.iter().map(|c| c.value).collect();
        assert_eq!(names, form_subjects);
    }

    #[test]
    fn test_upload_guideline_states_the_limit() {
        let limit = format!("{}MB", crate::state::MAX_UPLOAD_BYTES / (1024 * 1024));
        assert!(UPLOAD_GUIDELINES.iter().any(|g| g.contains(&limit)));
    }
}
