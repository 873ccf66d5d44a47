use super::super::domain::GlobalFactor;

/// Score interval a rule fires on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Band {
    /// `score > bound`
    Above(f64),
    /// `score < bound`
    Below(f64),
    /// `low < score <= high`
    UpperClosed(f64, f64),
    /// `low <= score < high`
    LowerClosed(f64, f64),
}

impl Band {
    pub(crate) fn contains(self, score: f64) -> bool {
        match self {
            Self::Above(bound) => score > bound,
            Self::Below(bound) => score < bound,
            Self::UpperClosed(low, high) => score > low && score <= high,
            Self::LowerClosed(low, high) => score >= low && score < high,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct RuleBands {
    pub strong_strength: Band,
    pub moderate_strength: Band,
    pub strong_concern: Band,
    pub moderate_concern: Band,
}

const STANDARD_BANDS: RuleBands = RuleBands {
    strong_strength: Band::Above(70.0),
    moderate_strength: Band::UpperClosed(60.0, 70.0),
    strong_concern: Band::Below(40.0),
    moderate_concern: Band::LowerClosed(40.0, 50.0),
};

// Low anxiety is the desirable end of the scale.
const INVERTED_BANDS: RuleBands = RuleBands {
    strong_strength: Band::Below(40.0),
    moderate_strength: Band::LowerClosed(40.0, 50.0),
    strong_concern: Band::Above(60.0),
    moderate_concern: Band::UpperClosed(50.0, 60.0),
};

pub(crate) const fn bands_for(factor: GlobalFactor) -> RuleBands {
    match factor {
        GlobalFactor::Anxiety => INVERTED_BANDS,
        _ => STANDARD_BANDS,
    }
}

pub(crate) struct FactorStatements {
    pub strong_strengths: &'static [&'static str],
    pub moderate_strength: &'static str,
    pub strong_concerns: &'static [&'static str],
    pub moderate_concern: &'static str,
}

pub(crate) const fn statements_for(factor: GlobalFactor) -> &'static FactorStatements {
    match factor {
        GlobalFactor::Extraversion => &EXTRAVERSION,
        GlobalFactor::Anxiety => &ANXIETY,
        GlobalFactor::ToughMindedness => &TOUGH_MINDEDNESS,
        GlobalFactor::Independence => &INDEPENDENCE,
        GlobalFactor::SelfControl => &SELF_CONTROL,
    }
}

const EXTRAVERSION: FactorStatements = FactorStatements {
    strong_strengths: &[
        "Builds rapport quickly and energizes the people around them",
        "Communicates openly and is comfortable in highly social settings",
        "Naturally takes the lead in group discussions and team activities",
    ],
    moderate_strength: "Balances sociability with the ability to work independently",
    strong_concerns: &[
        "May find networking and frequent social interaction draining",
        "Could benefit from speaking up more readily in group settings",
        "May hold back ideas in larger meetings or unfamiliar company",
    ],
    moderate_concern: "Could build confidence in initiating conversations with new contacts",
};

const ANXIETY: FactorStatements = FactorStatements {
    strong_strengths: &[
        "Demonstrates strong emotional stability under pressure",
        "Stays calm and composed when facing setbacks or criticism",
        "Recovers quickly from stressful situations and keeps perspective",
    ],
    moderate_strength: "Generally handles everyday pressure with composure",
    strong_concerns: &[
        "Would benefit from structured stress management techniques",
        "May worry excessively about outcomes and potential mistakes",
        "Could be sensitive to criticism in high-pressure environments",
    ],
    moderate_concern: "Occasionally feels tension during periods of heavy workload",
};

const TOUGH_MINDEDNESS: FactorStatements = FactorStatements {
    strong_strengths: &[
        "Approaches problems objectively and stays focused on facts",
        "Makes decisive choices without being swayed by sentiment",
        "Remains practical and results-oriented under changing conditions",
    ],
    moderate_strength: "Balances logical analysis with openness to new perspectives",
    strong_concerns: &[
        "May let emotions weigh heavily on business decisions",
        "Could find it hard to commit when information is ambiguous",
        "May benefit from grounding ideas in practical constraints",
    ],
    moderate_concern: "Could strengthen decisiveness in time-critical situations",
};

const INDEPENDENCE: FactorStatements = FactorStatements {
    strong_strengths: &[
        "Takes initiative and drives work forward without close supervision",
        "Confident in forming and defending their own viewpoints",
        "Comfortable challenging the status quo to push for improvement",
    ],
    moderate_strength: "Shows healthy self-direction while remaining open to guidance",
    strong_concerns: &[
        "May rely heavily on others' direction before acting",
        "Could find it difficult to assert opinions in disagreements",
        "May defer decisions that they are well placed to make",
    ],
    moderate_concern: "Could take more ownership when direction is unclear",
};

const SELF_CONTROL: FactorStatements = FactorStatements {
    strong_strengths: &[
        "Highly organized and disciplined in following through on commitments",
        "Pays close attention to detail, standards and quality",
        "Plans ahead and manages time and priorities effectively",
    ],
    moderate_strength: "Maintains reliable structure while adapting to change",
    strong_concerns: &[
        "May find it challenging to follow structured processes consistently",
        "Could benefit from stronger planning and prioritization habits",
        "May act on impulse rather than following an agreed plan",
    ],
    moderate_concern: "Could improve consistency in meeting deadlines and routines",
};

pub(crate) const GENERIC_STRENGTHS: &[&str] = &[
    "Shows a balanced personality profile across the measured dimensions",
    "Adapts behaviour to the demands of different situations",
    "Demonstrates flexibility in working with a variety of people",
];

pub(crate) const GENERIC_DEVELOPMENT_AREAS: &[&str] = &[
    "Continue building self-awareness through regular feedback",
    "Identify one or two dimensions to develop deliberately over time",
    "Seek stretch assignments that exercise less familiar strengths",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CareerCondition {
    Both(GlobalFactor, GlobalFactor),
    Single(GlobalFactor),
}

impl CareerCondition {
    pub(crate) fn matches(self, top: &[GlobalFactor]) -> bool {
        match self {
            Self::Both(first, second) => top.contains(&first) && top.contains(&second),
            Self::Single(factor) => top.contains(&factor),
        }
    }
}

pub(crate) type CareerBundle = &'static [(&'static str, &'static str)];

/// Evaluated in order; the first matching condition selects the bundle.
pub(crate) const CAREER_RULES: &[(CareerCondition, CareerBundle)] = &[
    (
        CareerCondition::Both(GlobalFactor::Extraversion, GlobalFactor::Independence),
        &[
            (
                "Sales Director/VP Sales",
                "Social energy and self-direction suit owning ambitious revenue targets",
            ),
            (
                "Entrepreneur",
                "Comfortable persuading stakeholders and acting without close direction",
            ),
            (
                "Business Development Manager",
                "Opens new relationships and pursues opportunities autonomously",
            ),
            (
                "Public Relations Director",
                "Confident external presence combined with willingness to take a stand",
            ),
        ],
    ),
    (
        CareerCondition::Both(GlobalFactor::Extraversion, GlobalFactor::SelfControl),
        &[
            (
                "Operations Manager",
                "Pairs people leadership with disciplined execution",
            ),
            (
                "Project Manager",
                "Keeps teams engaged while holding plans and deadlines together",
            ),
            (
                "HR Manager",
                "Builds trust with employees and applies policy consistently",
            ),
        ],
    ),
    (
        CareerCondition::Both(GlobalFactor::ToughMindedness, GlobalFactor::Independence),
        &[
            (
                "Strategy Consultant",
                "Objective analysis backed by confidence to challenge assumptions",
            ),
            (
                "Product Manager",
                "Makes firm trade-off decisions and drives direction independently",
            ),
            (
                "Engineering Manager",
                "Practical problem solving with ownership of technical outcomes",
            ),
        ],
    ),
    (
        CareerCondition::Both(GlobalFactor::SelfControl, GlobalFactor::ToughMindedness),
        &[
            (
                "Financial Controller",
                "Rigorous, fact-based and disciplined with detail",
            ),
            (
                "Compliance Officer",
                "Applies standards objectively and follows procedures thoroughly",
            ),
            (
                "Quality Assurance Manager",
                "Combines structure with a practical eye for defects",
            ),
        ],
    ),
    (
        CareerCondition::Single(GlobalFactor::Extraversion),
        &[
            (
                "Marketing Manager",
                "Energized by audiences and comfortable promoting ideas",
            ),
            (
                "Customer Success Manager",
                "Builds lasting relationships with clients",
            ),
            (
                "Corporate Trainer",
                "Enjoys presenting and engaging groups of learners",
            ),
        ],
    ),
    (
        CareerCondition::Single(GlobalFactor::Independence),
        &[
            (
                "Independent Consultant",
                "Self-directed and comfortable setting their own course",
            ),
            (
                "Research Lead",
                "Pursues original lines of inquiry with minimal oversight",
            ),
            (
                "Change Manager",
                "Willing to challenge established practices",
            ),
        ],
    ),
    (
        CareerCondition::Single(GlobalFactor::SelfControl),
        &[
            (
                "Project Coordinator",
                "Organized and reliable in tracking commitments",
            ),
            (
                "Accountant",
                "Careful, methodical and attentive to accuracy",
            ),
            (
                "Operations Analyst",
                "Brings structure and consistency to processes",
            ),
        ],
    ),
    (
        CareerCondition::Single(GlobalFactor::ToughMindedness),
        &[
            (
                "Data Analyst",
                "Objective and comfortable reasoning from evidence",
            ),
            ("Systems Engineer", "Practical, focused problem solver"),
            (
                "Risk Analyst",
                "Weighs options without being swayed by sentiment",
            ),
        ],
    ),
];

pub(crate) const DEFAULT_CAREER_BUNDLE: CareerBundle = &[
    (
        "HR Generalist",
        "Balanced profile suited to varied people-focused responsibilities",
    ),
    (
        "Team Coordinator",
        "Adaptable across collaborative and independent work",
    ),
    (
        "Customer Service Specialist",
        "Versatile temperament for handling a range of requests",
    ),
];
