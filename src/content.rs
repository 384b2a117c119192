//! Static site content. Every section renders from these tables.

pub const SECTION_ABOUT: &str = "about";
pub const SECTION_JOURNEY: &str = "journey";
pub const SECTION_PROJECTS: &str = "projects";
pub const SECTION_SKILLS: &str = "skills";
pub const SECTION_CONTACT: &str = "contact";

#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub summary: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Sujoy Sarkar",
    headline: "Full Stack Developer",
    summary: "Passionate about building real-time, Firebase-powered applications and MERN stack solutions. Currently seeking opportunities to create amazing user experiences.",
    email: "srkarsujoy715@gmail.com",
    phone: "+91 9382420874",
    location: "Kolkata, West Bengal, India",
    github: "https://github.com/sujoy1610",
    linkedin: "https://www.linkedin.com/in/sujoy-sarkar-b74018319",
};

pub const ROLES: &[&str] = &[
    "Full Stack Developer",
    "React Specialist",
    "Firebase Expert",
    "UI/UX Enthusiast",
];

#[derive(Debug, Clone, Copy)]
pub struct Milestone {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub year: &'static str,
}

pub const MILESTONES: &[Milestone] = &[
    Milestone {
        icon: "💻",
        title: "Started Self-Learning",
        description: "Began my journey with HTML, CSS, and JavaScript fundamentals",
        year: "2023",
    },
    Milestone {
        icon: "🚀",
        title: "React Mastery",
        description: "Dove deep into React, hooks, and modern development practices",
        year: "2024",
    },
    Milestone {
        icon: "🎯",
        title: "Firebase Integration",
        description: "Mastered real-time databases, authentication, and cloud functions",
        year: "2024",
    },
    Milestone {
        icon: "🏆",
        title: "Full Stack Projects",
        description: "Built and deployed complete applications including my News App",
        year: "2025",
    },
];

pub const DRIVES: &[&str] = &[
    "🚀 I'm passionate about building applications that provide real value to users. My focus is on creating seamless, responsive experiences that work flawlessly across all devices.",
    "💡 I love solving complex problems with clean, efficient code. Every project is an opportunity to learn something new and push the boundaries of what's possible.",
    "🎯 Currently seeking a full-time role where I can contribute to meaningful projects and continue growing as a developer in a collaborative environment.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JourneyStatus {
    Completed,
    Current,
}

#[derive(Debug, Clone, Copy)]
pub struct JourneyItem {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub date: &'static str,
    pub status: JourneyStatus,
}

impl JourneyItem {
    pub fn is_current(&self) -> bool {
        self.status == JourneyStatus::Current
    }
}

pub const JOURNEY: &[JourneyItem] = &[
    JourneyItem {
        icon: "🎓",
        title: "Started Learning Web Development",
        description: "Began my self-taught journey with HTML, CSS, and JavaScript. Built my first static websites and fell in love with coding.",
        date: "January 2023",
        status: JourneyStatus::Completed,
    },
    JourneyItem {
        icon: "💼",
        title: "First React Projects",
        description: "Dove deep into React ecosystem, learned hooks, state management, and built several personal projects to solidify my understanding.",
        date: "July 2023",
        status: JourneyStatus::Completed,
    },
    JourneyItem {
        icon: "💼",
        title: "Firebase & Backend Integration",
        description: "Mastered Firebase for authentication, real-time databases, and cloud functions. Built full-stack applications with complete CRUD functionality.",
        date: "March 2024",
        status: JourneyStatus::Completed,
    },
    JourneyItem {
        icon: "💼",
        title: "News App - Major Project",
        description: "Developed a comprehensive news application with role-based admin panel, real-time features, and advanced user interface.",
        date: "November 2024",
        status: JourneyStatus::Completed,
    },
    JourneyItem {
        icon: "📍",
        title: "Redux Toolkit & Advanced State Management",
        description: "Enhanced my skills with Redux Toolkit for complex state management and learned React Query for efficient data fetching.",
        date: "January 2025",
        status: JourneyStatus::Completed,
    },
    JourneyItem {
        icon: "💼",
        title: "Seeking Full-Time Opportunities",
        description: "Currently looking for a full-time role as a Full Stack Developer where I can contribute to meaningful projects and grow professionally.",
        date: "Present",
        status: JourneyStatus::Current,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub features: &'static [&'static str],
    pub live_url: &'static str,
    pub github_url: &'static str,
    pub featured: bool,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Real-Time News App (SS News)",
        description: "A comprehensive news application with role-based admin panel, real-time updates, and advanced features including bookmarking, dark mode, and responsive design.",
        image: "/placeholder.svg",
        tags: &["React", "Firebase", "Redux Toolkit", "Tailwind CSS", "News API"],
        features: &[
            "🔐 Role-based authentication (Admin/User)",
            "📰 Real-time news updates",
            "🔖 Bookmark favorite articles",
            "🌙 Dark/Light mode toggle",
            "📱 Fully responsive design",
            "⚡ Advanced search & filtering",
        ],
        live_url: "https://news-app-demo.vercel.app",
        github_url: "https://github.com/sujoy1610/ss-news",
        featured: true,
    },
    Project {
        title: "Patient Management System",
        description: "A comprehensive healthcare management system built with MERN stack. Users can login, select doctors by specialty, book appointments, and doctors can manage their schedules with admin panel.",
        image: "/placeholder.svg",
        tags: &["React", "Node.js", "Express", "MongoDB", "JWT", "Tailwind CSS"],
        features: &[
            "👤 User authentication & profiles",
            "👨‍⚕️ Doctor selection by specialty",
            "📅 Appointment booking system",
            "✅ Doctor appointment management",
            "🏥 Admin panel for oversight",
        ],
        live_url: "https://patient-management-demo.vercel.app",
        github_url: "https://github.com/sujoy1610/patient-management",
        featured: false,
    },
    Project {
        title: "Portfolio Website",
        description: "This very portfolio you're viewing! Built with modern technologies and smooth animations to showcase my work with responsive design.",
        image: "/placeholder.svg",
        tags: &["Rust", "Leptos", "WebAssembly", "Tailwind CSS"],
        features: &[
            "🦀 Server-rendered and hydrated with Leptos",
            "📱 Responsive design",
            "⚡ Optimized performance",
            "🎭 Smooth transitions",
        ],
        live_url: "https://sujoy-portfolio.vercel.app",
        github_url: "https://github.com/sujoy1610/portfolio",
        featured: false,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency in percent.
    pub level: u8,
    pub gradient: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub category: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        category: "Frontend",
        skills: &[
            Skill { name: "HTML5", level: 95, gradient: "from-orange-500 to-red-500" },
            Skill { name: "CSS3", level: 90, gradient: "from-blue-500 to-cyan-500" },
            Skill { name: "JavaScript", level: 85, gradient: "from-yellow-500 to-orange-500" },
            Skill { name: "React", level: 90, gradient: "from-blue-400 to-cyan-400" },
            Skill { name: "Tailwind CSS", level: 85, gradient: "from-teal-500 to-green-500" },
            Skill { name: "Vite", level: 80, gradient: "from-purple-500 to-pink-500" },
        ],
    },
    SkillCategory {
        category: "Backend & Database",
        skills: &[
            Skill { name: "Firebase", level: 85, gradient: "from-yellow-600 to-orange-600" },
            Skill { name: "Node.js", level: 70, gradient: "from-green-600 to-teal-600" },
            Skill { name: "REST APIs", level: 80, gradient: "from-indigo-500 to-purple-500" },
        ],
    },
    SkillCategory {
        category: "State Management & Tools",
        skills: &[
            Skill { name: "Redux Toolkit", level: 80, gradient: "from-purple-600 to-indigo-600" },
            Skill { name: "Git", level: 85, gradient: "from-gray-600 to-gray-800" },
            Skill { name: "VS Code", level: 90, gradient: "from-blue-600 to-indigo-600" },
            Skill { name: "Vercel", level: 85, gradient: "from-gray-800 to-black" },
        ],
    },
];

pub const EXTRA_TOOLS: &[&str] = &["Postman", "Figma", "Adobe XD", "Photoshop", "Framer Motion"];

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
    pub icon_class: &'static str,
    pub hover_class: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        url: PROFILE.github,
        icon_class: "devicon-github-plain",
        hover_class: "hover:text-gray-400",
    },
    SocialLink {
        label: "LinkedIn",
        url: PROFILE.linkedin,
        icon_class: "devicon-linkedin-plain",
        hover_class: "hover:text-blue-400",
    },
    SocialLink {
        label: "Email",
        url: "mailto:srkarsujoy715@gmail.com",
        icon_class: "devicon-google-plain",
        hover_class: "hover:text-green-400",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct ContactChannel {
    pub icon: &'static str,
    pub title: &'static str,
    pub value: &'static str,
    /// Where clicking the card leads, if anywhere.
    pub href: Option<&'static str>,
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        icon: "📧",
        title: "Email",
        value: PROFILE.email,
        href: Some("mailto:srkarsujoy715@gmail.com"),
    },
    ContactChannel {
        icon: "📱",
        title: "Phone",
        value: PROFILE.phone,
        href: Some("tel:+919382420874"),
    },
    ContactChannel {
        icon: "🔗",
        title: "LinkedIn",
        value: "Connect with me",
        href: Some(PROFILE.linkedin),
    },
    ContactChannel {
        icon: "🐙",
        title: "GitHub",
        value: "View my repositories",
        href: Some(PROFILE.github),
    },
    ContactChannel {
        icon: "📍",
        title: "Location",
        value: PROFILE.location,
        href: None,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct NavSection {
    pub name: &'static str,
    pub id: &'static str,
}

impl NavSection {
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

pub const NAV_SECTIONS: &[NavSection] = &[
    NavSection { name: "About", id: SECTION_ABOUT },
    NavSection { name: "Skills", id: SECTION_SKILLS },
    NavSection { name: "Projects", id: SECTION_PROJECTS },
    NavSection { name: "Contact", id: SECTION_CONTACT },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_single_current_journey_item_is_last() {
        let current = JOURNEY.iter().filter(|j| j.is_current()).count();
        assert_eq!(current, 1);
        assert!(JOURNEY.last().expect("journey is not empty").is_current());
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        for category in SKILL_CATEGORIES {
            assert!(!category.skills.is_empty(), "{} has no skills", category.category);
            for skill in category.skills {
                assert!(skill.level <= 100, "{} is over 100%", skill.name);
            }
        }
    }

    #[test]
    fn test_nav_sections_point_at_distinct_sections() {
        let ids = NAV_SECTIONS.iter().map(|s| s.id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), NAV_SECTIONS.len());
        let rendered = [
            SECTION_ABOUT,
            SECTION_JOURNEY,
            SECTION_PROJECTS,
            SECTION_SKILLS,
            SECTION_CONTACT,
        ];
        for id in ids {
            assert!(rendered.contains(&id));
        }
        assert_eq!(NAV_SECTIONS[0].href(), "#about");
    }

    #[test]
    fn test_featured_projects_list_features() {
        assert!(PROJECTS.iter().any(|p| p.featured));
        for project in PROJECTS.iter().filter(|p| p.featured) {
            assert!(!project.features.is_empty());
        }
    }

    #[test]
    fn test_only_location_channel_is_inert() {
        let inert = CONTACT_CHANNELS
            .iter()
            .filter(|c| c.href.is_none())
            .map(|c| c.title)
            .collect::<Vec<_>>();
        assert_eq!(inert, vec!["Location"]);
    }
}
