//! Everything the page says about its owner.

pub const NAME: &str = "Darshit Timania";
pub const BRAND_INITIAL: &str = "D";
pub const BRAND_REST: &str = "arshit";
pub const ROLE: &str = "Computer Engineering Student";
pub const PITCH: &str = "Seeking to apply my extensive academic background and coding experience in an organization with an innovative vision.";
pub const SUMMARY: &str = "I am a computer engineering student seeking to apply my extensive academic background and coding experience in an organization with an innovative vision. I am looking forward to contributing to a dynamic team and supporting research and development efforts.";

pub const PORTRAIT: &str = "/profile.jpg";
pub const RESUME_PATH: &str = "/darshit_cv.pdf";
pub const RESUME_FILE_NAME: &str = "darshit_cv.pdf";

pub struct Education {
    pub degree: &'static str,
    pub years: &'static str,
    pub school: &'static str,
    pub coursework: &'static str,
}

pub const EDUCATION: Education = Education {
    degree: "Bachelor of Computer Engineering",
    years: "2022-2026",
    school: "GUJARAT TECHNOLOGICAL UNIVERSITY, GMIT",
    coursework: "HTML, CSS, JAVA, BASIC PYTHON, C, C++",
};

pub static LANGUAGES: [&str; 3] = ["English", "Gujarati", "Hindi"];

pub struct Research {
    pub title: &'static str,
    pub year: &'static str,
    pub department: &'static str,
    pub highlights: &'static [&'static str],
}

pub const RESEARCH: Research = Research {
    title: "Exam Secure System",
    year: "2025",
    department: "Computer Engineering Department, GMIT",
    highlights: &[
        "Collaborated with a research team to study the problem which was assigned to us.",
        "Conducted experiments using Arduino UNO, Node MCU, Arduino Mega etc.",
        "Analyzed and interpreted data, Displayed the prototype at Techmanjari at GMIT.",
    ],
};

/// A skill bar; `level` is a percentage of the bar's width.
pub struct Skill {
    pub name: &'static str,
    pub detail: &'static str,
    pub icon: &'static str,
    pub level: u8,
}

pub static TECHNICAL_SKILLS: [Skill; 3] = [
    Skill {
        name: "Programming Languages",
        detail: "C++, Java, Python, C",
        icon: "",
        level: 85,
    },
    Skill {
        name: "Web Development",
        detail: "HTML, CSS",
        icon: "",
        level: 75,
    },
    Skill {
        name: "Software Tools",
        detail: "VS Code, Eclipse, Git/GitHub, Arduino IDE",
        icon: "",
        level: 80,
    },
];

pub static SOFT_SKILLS: [Skill; 4] = [
    Skill {
        name: "Problem Solving",
        detail: "",
        icon: "🧩",
        level: 90,
    },
    Skill {
        name: "Team Collaboration",
        detail: "",
        icon: "👥",
        level: 85,
    },
    Skill {
        name: "Adaptability",
        detail: "",
        icon: "🔄",
        level: 80,
    },
    Skill {
        name: "Communication",
        detail: "",
        icon: "💬",
        level: 85,
    },
];

pub struct Project {
    pub title: &'static str,
    pub year: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

pub static PROJECTS: [Project; 2] = [
    Project {
        title: "Exam Secure System",
        year: "2025",
        description: "A comprehensive system designed to prevent cheating during exams using biometric authentication, real-time proctoring, and secure distribution of exam materials.",
        tags: &["Arduino", "Node MCU", "IoT", "Security"],
    },
    Project {
        title: "Portfolio Website",
        year: "2025",
        description: "A futuristic portfolio website showcasing my skills, projects, and experience. Built with Rust and Leptos, featuring modern animations and a unique design.",
        tags: &["Rust", "Leptos", "Tailwind CSS", "WebAssembly"],
    },
];

pub const EMAIL: &str = "timaniadarsiht07@gmail.com";
pub const PHONE_DISPLAY: &str = "+91 8849483433";
pub const PHONE_URI: &str = "+918849483433";
pub const LOCATION: &str = "Gujarat, India";

pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

// profile URLs haven't been published yet
pub static SOCIAL_LINKS: [SocialLink; 2] = [
    SocialLink {
        label: "GitHub",
        href: "#",
        icon: "devicon-github-plain",
    },
    SocialLink {
        label: "LinkedIn",
        href: "#",
        icon: "devicon-linkedin-plain",
    },
];

pub fn mailto() -> String {
    format!("mailto:{EMAIL}")
}

pub fn tel() -> String {
    format!("tel:{PHONE_URI}")
}

/// Tailwind needs literal class names, so bar widths go through `style`.
pub fn bar_width(level: u8) -> String {
    format!("width: {}%", level.min(100))
}
