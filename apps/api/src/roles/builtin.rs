use super::RoleProfile;

struct Seed {
    id: &'static str,
    display_name: &'static str,
    interviewer_title: &'static str,
    company: &'static str,
    greeting: &'static str,
    focus: &'static str,
    interview_flow: &'static [&'static str],
    question_bank: &'static [&'static str],
}

impl Seed {
    fn into_profile(self) -> RoleProfile {
        RoleProfile {
            id: self.id.to_string(),
            display_name: self.display_name.to_string(),
            interviewer_title: self.interviewer_title.to_string(),
            company: self.company.to_string(),
            greeting: self.greeting.to_string(),
            focus: self.focus.to_string(),
            interview_flow: self.interview_flow.iter().map(|s| s.to_string()).collect(),
            question_bank: self.question_bank.iter().map(|s| s.to_string()).collect(),
        }
    }
}

pub(super) fn profiles() -> Vec<RoleProfile> {
    SEEDS.into_iter().map(Seed::into_profile).collect()
}

const SEEDS: [Seed; 6] = [
    Seed {
        id: "software-engineer",
        display_name: "Software Engineer",
        interviewer_title: "Senior Software Engineering Manager",
        company: "TechCorp",
        greeting: "Good morning/afternoon. I'm Sarah Johnson, Senior Engineering Manager here at TechCorp. \
            Thank you for taking the time to interview with us today for the Software Engineer position.",
        focus: "technical problem-solving, coding proficiency, system design, software development lifecycle, \
            teamwork in technical environments",
        interview_flow: &[
            "Personal introduction and background",
            "Technical experience and programming languages",
            "Problem-solving and algorithmic thinking",
            "System design and architecture",
            "Code quality and best practices",
            "Team collaboration and project experience",
            "Career goals and company fit",
        ],
        question_bank: &[
            "Tell me about yourself and your experience in software development.",
            "Describe a challenging technical problem you've solved recently. What was your approach?",
            "How do you approach debugging when you encounter a complex issue?",
            "What programming languages and frameworks are you most comfortable with, and why?",
            "How do you stay updated with the latest technologies and best practices in software development?",
            "Describe your experience with version control systems like Git. How do you handle merge conflicts?",
            "Tell me about a time when you had to optimize the performance of an application. What strategies did you use?",
        ],
    },
    Seed {
        id: "product-manager",
        display_name: "Product Manager",
        interviewer_title: "Director of Product Management",
        company: "InnovateCorp",
        greeting: "Good morning/afternoon. I'm Michael Chen, Director of Product Management at InnovateCorp. \
            I'm pleased to meet with you today regarding the Product Manager position.",
        focus: "product strategy, user research, stakeholder management, data-driven decision making, \
            market analysis, roadmap planning",
        interview_flow: &[
            "Background and product management experience",
            "Product strategy and vision",
            "User research and customer insights",
            "Stakeholder management and communication",
            "Data analysis and metrics",
            "Prioritization and roadmap planning",
            "Leadership and team collaboration",
        ],
        question_bank: &[
            "Tell me about your experience in product management and what drew you to this field.",
            "How do you prioritize features when you have limited resources and competing stakeholder demands?",
            "Describe a time when you had to make a difficult product decision. What was your process?",
            "How do you gather and incorporate user feedback into your product roadmap?",
            "What metrics do you use to measure product success, and how do you track them?",
            "Tell me about a product launch you've managed. What challenges did you face?",
            "How do you balance technical debt with new feature development?",
        ],
    },
    Seed {
        id: "ux-designer",
        display_name: "UX Designer",
        interviewer_title: "Head of User Experience Design",
        company: "DesignFirst Inc",
        greeting: "Good morning/afternoon. I'm Emma Rodriguez, Head of UX Design at DesignFirst Inc. \
            Thank you for your interest in the UX Designer position.",
        focus: "design thinking, user research, prototyping, design systems, accessibility, user empathy, \
            design process",
        interview_flow: &[
            "Design background and philosophy",
            "Design process and methodology",
            "User research and testing experience",
            "Portfolio discussion and case studies",
            "Design systems and collaboration",
            "Accessibility and inclusive design",
            "Career aspirations in UX",
        ],
        question_bank: &[
            "Walk me through your design process from initial concept to final delivery.",
            "How do you approach user research, and what methods do you find most effective?",
            "Describe a challenging design problem you solved. What was your methodology?",
            "How do you balance user needs with business requirements when they conflict?",
            "What design tools and prototyping methods do you prefer, and why?",
            "Tell me about a time when user testing revealed unexpected insights. How did you adapt?",
            "How do you ensure consistency across different platforms and devices in your designs?",
        ],
    },
    Seed {
        id: "data-scientist",
        display_name: "Data Scientist",
        interviewer_title: "Principal Data Scientist",
        company: "DataTech Solutions",
        greeting: "Good morning/afternoon. I'm Dr. James Wilson, Principal Data Scientist at DataTech Solutions. \
            I'm excited to discuss the Data Scientist opportunity with you today.",
        focus: "statistical analysis, machine learning, data modeling, business problem-solving, \
            programming skills, research methodology",
        interview_flow: &[
            "Educational background and data science journey",
            "Statistical analysis and methodology",
            "Machine learning experience and applications",
            "Programming and technical skills",
            "Business problem-solving approach",
            "Data visualization and communication",
            "Research experience and continuous learning",
        ],
        question_bank: &[
            "Tell me about your path into data science and the kind of problems you enjoy.",
            "Walk me through how you would design and evaluate an A/B test.",
            "Describe a machine learning model you took to production. How did you validate it?",
            "How do you handle missing or messy data before modeling?",
            "Tell me about a time you translated a vague business question into a data problem.",
            "How do you explain a model's results to a non-technical stakeholder?",
        ],
    },
    Seed {
        id: "marketing-manager",
        display_name: "Marketing Manager",
        interviewer_title: "VP of Marketing",
        company: "GrowthCorp",
        greeting: "Good morning/afternoon. I'm Lisa Thompson, VP of Marketing at GrowthCorp. \
            I'm delighted to speak with you about the Marketing Manager position.",
        focus: "marketing strategy, campaign management, brand development, market research, \
            digital marketing, ROI analysis",
        interview_flow: &[
            "Marketing background and experience",
            "Campaign strategy and execution",
            "Brand management and positioning",
            "Market research and analysis",
            "Digital marketing and channels",
            "Performance measurement and ROI",
            "Team leadership and collaboration",
        ],
        question_bank: &[
            "Tell me about your marketing background and the campaigns you're proudest of.",
            "Walk me through how you would plan a campaign for a new product launch.",
            "How do you position a brand against a stronger competitor?",
            "Which digital channels have worked best for you, and how did you decide?",
            "How do you measure ROI and attribute results across channels?",
            "Describe a campaign that underperformed. What did you change?",
        ],
    },
    Seed {
        id: "sales-representative",
        display_name: "Sales Representative",
        interviewer_title: "Regional Sales Director",
        company: "SalesPro Inc",
        greeting: "Good morning/afternoon. I'm Robert Davis, Regional Sales Director at SalesPro Inc. \
            Thank you for your interest in the Sales Representative position.",
        focus: "sales methodology, relationship building, negotiation, pipeline management, \
            target achievement, customer service",
        interview_flow: &[
            "Sales background and achievements",
            "Sales process and methodology",
            "Relationship building and networking",
            "Negotiation and closing techniques",
            "Pipeline management and forecasting",
            "Customer service and retention",
            "Goal setting and performance",
        ],
        question_bank: &[
            "Tell me about your sales background and your biggest win.",
            "Walk me through your sales process from first contact to close.",
            "How do you handle a prospect who says the price is too high?",
            "How do you keep your pipeline healthy and forecast accurately?",
            "Describe a time you missed a target. What did you learn?",
            "How do you build long-term relationships with existing customers?",
        ],
    },
];
