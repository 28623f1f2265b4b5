//! Static page copy.

use chrono::{DateTime, Datelike, Utc};

pub const NAME: &str = "Yashassvi Suhane";
pub const FIRST_NAME: &str = "Yashassvi";
pub const INITIALS: &str = "YS";
pub const ROLE: &str = "Full Stack Software Engineer";
pub const SUMMARY: &str = "Passionate about building scalable web applications with modern technologies. \
Currently leading UI revamps and backend development at a79.ai, with expertise in React, TypeScript, and FastAPI.";
pub const LOCATION: &str = "Bengaluru, Karnataka, India";
pub const EMAIL: &str = "suhaneyashassvi@gmail.com";

pub const RESUME_PATH: &str = "/resume.pdf";
pub const RESUME_FILENAME: &str = "Yashassvi_Suhane_Resume.pdf";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { href: "#about", label: "About" },
    NavItem { href: "#skills", label: "Skills" },
    NavItem { href: "#experience", label: "Experience" },
    NavItem { href: "#projects", label: "Projects" },
    NavItem { href: "#education", label: "Education" },
    NavItem { href: "#personal", label: "Personal" },
    NavItem { href: "#contact", label: "Contact" },
];

/// Ids of the sections rendered on the home page, in page order.
pub const SECTION_IDS: &[&str] = &[
    "about",
    "skills",
    "experience",
    "projects",
    "education",
    "personal",
    "contact",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub accent: &'static str,
}

pub const HERO_STATS: &[Stat] = &[
    Stat { value: "60%", label: "Bug Reduction", accent: "text-primary" },
    Stat { value: "39%", label: "Performance Boost", accent: "text-green-500" },
    Stat { value: "300+", label: "Bugs Fixed", accent: "text-blue-500" },
    Stat { value: "238+", label: "Commits", accent: "text-purple-500" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tech {
    pub name: &'static str,
    pub icon: &'static str,
}

pub const TECHNOLOGIES: &[Tech] = &[
    Tech { name: "JavaScript", icon: "JS" },
    Tech { name: "TypeScript", icon: "TS" },
    Tech { name: "React", icon: "⚛️" },
    Tech { name: "Next.js", icon: "▲" },
    Tech { name: "Node.js", icon: "🟢" },
    Tech { name: "Python", icon: "🐍" },
    Tech { name: "FastAPI", icon: "⚡" },
    Tech { name: "PostgreSQL", icon: "🐘" },
    Tech { name: "MongoDB", icon: "🍃" },
    Tech { name: "AWS", icon: "☁️" },
    Tech { name: "Docker", icon: "🐳" },
    Tech { name: "Git", icon: "📝" },
    Tech { name: "Linux", icon: "🐧" },
    Tech { name: "Tailwind", icon: "💨" },
    Tech { name: "Figma", icon: "🎨" },
    Tech { name: "Vite", icon: "⚡" },
    Tech { name: "Express", icon: "🚀" },
    Tech { name: "Redux", icon: "🔄" },
    Tech { name: "Zustand", icon: "🐻" },
    Tech { name: "Prisma", icon: "💎" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Self-assessed proficiency, 0-100.
    pub level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub color: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Frontend",
        color: "text-blue-500",
        skills: &[
            Skill { name: "React.js", level: 95 },
            Skill { name: "TypeScript", level: 90 },
            Skill { name: "Next.js", level: 85 },
            Skill { name: "Tailwind CSS", level: 88 },
        ],
    },
    SkillCategory {
        title: "Backend",
        color: "text-green-500",
        skills: &[
            Skill { name: "FastAPI", level: 80 },
            Skill { name: "SQLAlchemy", level: 75 },
            Skill { name: "REST APIs", level: 88 },
            Skill { name: "Python", level: 82 },
        ],
    },
    SkillCategory {
        title: "Tools & Infrastructure",
        color: "text-purple-500",
        skills: &[
            Skill { name: "Git/GitHub", level: 95 },
            Skill { name: "AWS", level: 70 },
            Skill { name: "Docker", level: 65 },
            Skill { name: "Linux", level: 85 },
        ],
    },
    SkillCategory {
        title: "Testing & Quality",
        color: "text-orange-500",
        skills: &[
            Skill { name: "Vitest", level: 85 },
            Skill { name: "Playwright", level: 80 },
            Skill { name: "CI/CD", level: 75 },
            Skill { name: "Code Review", level: 90 },
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub status: Option<&'static str>,
    pub achievements: &'static [&'static str],
}

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        title: "Software Engineer — Full Stack",
        company: "a79.ai (US-based AI Startup)",
        period: "Oct 2024 – Present",
        status: Some("Current"),
        achievements: &[
            "Led UI revamp with React, TypeScript, shadcn/ui, and React Hooks, reducing visual bugs by 60% and increasing user satisfaction.",
            "Built and maintained frontend testing suites with Vitest and Playwright, lowering crash rates and frontend regressions by over 60%.",
            "Integrated Zustand and React Query, reducing redundant API calls by 40% and improving average page load time by 39%.",
            "Developed backend features with FastAPI and SQLAlchemy, such as secure cascading deletion APIs with robust authorization.",
            "Resolved 300+ UI bugs, driving significant stability and trust in the product.",
            "Contributed 238+ commits with over 54,000 lines added and 20,000 removed, supporting major features in a lean, high-velocity team.",
        ],
    },
    Experience {
        title: "Frontend Developer",
        company: "Sopeonow (Healthtech, Singapore)",
        period: "Jul 2024 – Present",
        status: None,
        achievements: &[
            "Enhanced application performance by 25% for a healthcare platform serving 1M+ patients.",
            "Streamlined workflows and improved patient admission efficiency by 15%, collaborating with cross-disciplinary teams.",
        ],
    },
    Experience {
        title: "Frontend Intern",
        company: "Willeder Inc. (Remote, USA)",
        period: "Mar 2024 – Jun 2024",
        status: None,
        achievements: &[
            "Built the entire Fukuryou real estate website from scratch, implementing modern Japanese UI design and functionality.",
            "Contributed to localization across multilingual React projects, improving coverage by 15%.",
            "Boosted team collaboration efficiency by 10% through code reusability and documentation.",
        ],
    },
    Experience {
        title: "Software Developer Intern",
        company: "Squareboat Technologies (Gurugram)",
        period: "Jul 2023 – Feb 2024",
        status: None,
        achievements: &[
            "Built responsive interfaces alongside UI/UX teams, raising customer satisfaction scores by 20%.",
            "Revamped educational platform frontend and added student performance tracking for cedarwood.co.in.",
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectLink {
    pub label: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub links: &'static [ProjectLink],
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Cedarwood Educational Platform",
        description: "Created features to track children's progress on the platform using Next.js, React Query, and TypeScript, enhancing educational monitoring capabilities.",
        image: "https://images.unsplash.com/photo-1503676260728-1c00da094a0b?auto=format&fit=crop&w=800&h=400",
        tags: &["Next.js", "React Query", "TypeScript", "Education", "Progress Tracking"],
        links: &[ProjectLink { label: "Demo", url: "https://cedarwood.co.in/" }],
    },
    Project {
        title: "Fukuryou Real Estate Platform",
        description: "Built the entire website from scratch for a Japanese real estate platform, improving user retention by 40% through enhanced user experience and modern design.",
        image: "/images/fukuryou.png",
        tags: &["Full Stack", "React", "SCSS", "Real Estate", "Japanese UI"],
        links: &[ProjectLink { label: "Demo", url: "https://fukuryou.com/" }],
    },
    Project {
        title: "Radiology Platform UI",
        description: "Built diagnostic interfaces for Singapore's NMH Hospital using Django, Jinja, HTML, and SCSS.",
        image: "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?auto=format&fit=crop&w=800&h=400",
        tags: &["Django", "Healthcare", "SCSS", "Medical Interface", "Hospital System"],
        links: &[],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub grade: &'static str,
    pub kind: &'static str,
}

pub const EDUCATION: &[Education] = &[
    Education {
        degree: "B.Tech (Hons), Computer Science Engineering",
        institution: "GLA University, Mathura",
        period: "2020 – 2024",
        grade: "CPI: 8.34",
        kind: "Bachelor's Degree",
    },
    Education {
        degree: "Intermediate (Science)",
        institution: "Sanskaar International School",
        period: "2019 – 2020",
        grade: "Percentage: 86.4%",
        kind: "Higher Secondary",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Certification {
    pub title: &'static str,
    pub issuer: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        title: "Cloud Digital Leader",
        issuer: "Google Cloud Platform",
        icon: "☁️",
        color: "bg-blue-100 text-blue-800 dark:bg-blue-900/30 dark:text-blue-400",
    },
    Certification {
        title: "Introduction to Networks",
        issuer: "Cisco Net Academy",
        icon: "🌐",
        color: "bg-green-100 text-green-800 dark:bg-green-900/30 dark:text-green-400",
    },
    Certification {
        title: "Agile Fundamentals",
        issuer: "Project Management Institute",
        icon: "🚀",
        color: "bg-purple-100 text-purple-800 dark:bg-purple-900/30 dark:text-purple-400",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interest {
    pub label: &'static str,
    pub description: &'static str,
    pub emoji: &'static str,
}

pub const PERSONAL_BLURB: &str = "Full-stack developer passionate about creating exceptional digital experiences. \
When I'm not coding, you'll find me exploring art galleries and listening to timeless jazz classics.";

pub const INTERESTS: &[Interest] = &[
    Interest { label: "Jazz Music", description: "Timeless classics and smooth melodies", emoji: "🎷" },
    Interest { label: "Art Galleries", description: "Exploring creativity and inspiration", emoji: "🎨" },
    Interest { label: "Coffee Culture", description: "Perfect brew, perfect code", emoji: "☕" },
    Interest { label: "Tech Books", description: "Always learning, always growing", emoji: "📚" },
    Interest { label: "Open Source", description: "Contributing to the community", emoji: "💻" },
    Interest { label: "UI/UX Design", description: "Crafting beautiful experiences", emoji: "✨" },
];

pub const FUN_FACTS: &[&str] = &[
    "🚀 Built my first website at 16",
    "☕ Coffee enthusiast - 3 cups minimum",
    "🎯 90%+ test coverage advocate",
    "🌏 Worked with teams across 3 continents",
    "🎨 Design & code are my love languages",
    "📚 Reading 'Clean Architecture' for the 3rd time",
];

pub const QUOTE: (&str, &str) = ("Talk is cheap. Show me the code.", "Linus Torvalds");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactDetail {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const CONTACT_DETAILS: &[ContactDetail] = &[
    ContactDetail {
        label: "Email",
        value: EMAIL,
        href: "mailto:suhaneyashassvi@gmail.com",
        icon: "📧",
    },
    ContactDetail {
        label: "Location",
        value: LOCATION,
        href: "#contact",
        icon: "📍",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    /// devicon class
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        href: "https://github.com/yashuswe",
        icon: "devicon-github-plain",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/",
        icon: "devicon-linkedin-plain",
    },
];

/// Year the site was built, for the footer copyright line.
pub fn build_year() -> i32 {
    year_of(env!("BUILD_TIME")).unwrap_or_else(|| Utc::now().year())
}

fn year_of(rfc3339: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(rfc3339)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).year())
}
