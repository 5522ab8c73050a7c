//! Sample data shown when a live fetch fails.

use crate::models::{Course, ResearchProject, ResearchStatus, SocialLinks, Stat, TeamMember, Testimonial};
use chrono::{DateTime, NaiveDate, Utc};

const SEEDED_AT: i64 = 1_704_067_200; // 2024-01-01T00:00:00Z

fn at(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn course(
    id: i32,
    title: &str,
    description: &str,
    duration: &str,
    level: &str,
    price: f64,
    category: &str,
    image_url: &str,
    features: &[&str],
) -> Course {
    Course {
        id,
        title: title.into(),
        description: Some(description.into()),
        duration: Some(duration.into()),
        level: Some(level.into()),
        price: Some(price),
        category: Some(category.into()),
        image_url: Some(image_url.into()),
        features: strings(features),
        created_at: at(SEEDED_AT),
    }
}

pub fn courses() -> Vec<Course> {
    vec![
        course(
            1,
            "Full Stack Web Development",
            "Learn modern web development with React, Node.js, and PostgreSQL. Build real-world applications and master the latest technologies.",
            "12 weeks",
            "Beginner",
            299.99,
            "Development",
            "/images/course-webdev.jpg",
            &["Hands-on Projects", "Mentor Support", "Career Guidance", "Certificate"],
        ),
        course(
            2,
            "AI & Machine Learning",
            "Dive into artificial intelligence and machine learning. Create intelligent applications with Python and TensorFlow.",
            "16 weeks",
            "Advanced",
            499.99,
            "AI",
            "/images/course-ai.jpg",
            &["Real-world Projects", "Industry Experts", "Certification", "Portfolio"],
        ),
        course(
            3,
            "DevOps Engineering",
            "Learn CI/CD, containerization, and cloud deployment. Master Docker, Kubernetes, and cloud platforms.",
            "10 weeks",
            "Intermediate",
            399.99,
            "DevOps",
            "/images/course-devops.jpg",
            &["AWS/Azure Labs", "Docker & Kubernetes", "Monitoring Tools", "CI/CD Pipelines"],
        ),
        course(
            4,
            "Cybersecurity Fundamentals",
            "Protect systems and networks from digital attacks. Learn ethical hacking and security best practices.",
            "14 weeks",
            "Intermediate",
            449.99,
            "Security",
            "/images/course-security.jpg",
            &["Ethical Hacking", "Network Security", "Incident Response", "Certification"],
        ),
        course(
            5,
            "Mobile App Development",
            "Build cross-platform mobile applications with React Native. Launch your apps on iOS and Android.",
            "11 weeks",
            "Intermediate",
            379.99,
            "Mobile",
            "/images/course-mobile.jpg",
            &["React Native", "App Store Deployment", "UI/UX Design", "Real Projects"],
        ),
    ]
}

pub fn testimonials() -> Vec<Testimonial> {
    let t = |id: i32, name: &str, role: &str, message: &str| Testimonial {
        id,
        name: name.into(),
        role: Some(role.into()),
        message: message.into(),
        rating: 5,
        photo_url: Some(format!("/images/testimonial{id}.jpg")),
        created_at: at(SEEDED_AT),
    };
    vec![
        t(
            1,
            "Sarah Johnson",
            "Full Stack Developer",
            "EduLearn completely transformed my career! The hands-on projects and expert mentorship helped me land my dream job at Google. The community support is incredible!",
        ),
        t(
            2,
            "Mike Chen",
            "AI Research Scientist",
            "The AI course gave me the practical skills I needed to transition from academia to industry. The real-world projects were exactly what employers were looking for!",
        ),
        t(
            3,
            "Emily Davis",
            "DevOps Engineer",
            "I went from zero coding experience to a DevOps engineer in 6 months. The structured learning path and career support made all the difference. Highly recommended!",
        ),
    ]
}

pub fn team() -> Vec<TeamMember> {
    let m = |id: i32, name: &str, role: &str, bio: &str| TeamMember {
        id,
        name: name.into(),
        role: Some(role.into()),
        bio: Some(bio.into()),
        photo_url: Some(format!("/images/team{id}.jpg")),
        social_links: SocialLinks {
            twitter: Some("#".into()),
            linkedin: Some("#".into()),
            ..SocialLinks::default()
        },
        created_at: at(SEEDED_AT),
    };
    vec![
        m(
            1,
            "Dr. Sarah Chen",
            "Chief Learning Officer",
            "Former Stanford professor with 15+ years in educational technology and curriculum design.",
        ),
        m(
            2,
            "Marcus Rodriguez",
            "Head of Technology",
            "Tech industry veteran passionate about building scalable learning platforms that make education accessible.",
        ),
        m(
            3,
            "Dr. Emily Watson",
            "Research Director",
            "Cognitive scientist specializing in learning methodologies and educational psychology.",
        ),
    ]
}

pub fn research() -> Vec<ResearchProject> {
    vec![
        ResearchProject {
            id: 1,
            title: "AI-Powered Personalized Learning Pathways".into(),
            summary: "Developing adaptive learning algorithms that create personalized educational journeys for students.".into(),
            description: Some(
                "This research focuses on creating intelligent systems that can analyze student performance, learning styles, and goals to generate customized learning paths.".into(),
            ),
            lead_researcher: Some("Dr. Sarah Chen".into()),
            research_team: strings(&["Dr. Mike Zhang", "Prof. Emily Wong", "Dr. James Kumar"]),
            duration: Some("24 months".into()),
            status: ResearchStatus::Ongoing,
            category: "Artificial Intelligence".into(),
            tags: strings(&["Machine Learning", "Adaptive Learning", "Educational Technology"]),
            publications: strings(&[
                "Chen, S. et al. (2024). Adaptive Learning Systems in Modern Education. Journal of Educational Technology.",
                "International Conference on AI in Education 2023",
            ]),
            funding_source: Some("National Science Foundation".into()),
            budget: Some(500_000.0),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 15),
            end_date: NaiveDate::from_ymd_opt(2025, 12, 15),
            image_url: Some("/images/research-ai.jpg".into()),
            project_link: Some("/research/ai-learning-pathways".into()),
            findings: Some(
                "Preliminary results show 35% improvement in learning outcomes compared to traditional methods.".into(),
            ),
            impact: Some(
                "Potential to revolutionize how educational content is delivered and personalized globally.".into(),
            ),
            created_at: at(1_704_844_800),
            updated_at: at(1_726_790_400),
        },
        ResearchProject {
            id: 2,
            title: "Blockchain for Academic Credential Verification".into(),
            summary: "Creating a decentralized system for secure and transparent verification of academic credentials.".into(),
            description: Some(
                "This project explores the application of blockchain technology to create tamper-proof digital credentials.".into(),
            ),
            lead_researcher: Some("Prof. Marcus Rodriguez".into()),
            research_team: strings(&["Dr. Lisa Thompson", "Alex Johnson, PhD Candidate"]),
            duration: Some("18 months".into()),
            status: ResearchStatus::Completed,
            category: "Blockchain & Security".into(),
            tags: strings(&["Blockchain", "Digital Credentials", "Data Security"]),
            publications: strings(&[
                "Rodriguez, M. (2024). Blockchain in Education: A Security Perspective. IEEE Security & Privacy.",
                "Blockchain Education Summit 2024 - Best Paper Award",
            ]),
            funding_source: Some("Department of Education Innovation Grant".into()),
            budget: Some(350_000.0),
            start_date: NaiveDate::from_ymd_opt(2023, 6, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 11, 30),
            image_url: Some("/images/research-blockchain.jpg".into()),
            project_link: Some("/research/blockchain-credentials".into()),
            findings: Some(
                "Successfully implemented a prototype handling 10,000+ credentials with zero security breaches.".into(),
            ),
            impact: Some("Could eliminate degree fraud and streamline hiring processes for employers worldwide.".into()),
            created_at: at(1_684_540_800),
            updated_at: at(1_732_924_800),
        },
    ]
}

pub fn stats() -> Vec<Stat> {
    let s = |id: i32, label: &str, value: i64, icon: &str| Stat {
        id,
        label: label.into(),
        value,
        icon: Some(icon.into()),
    };
    vec![
        s(1, "Students Enrolled", 10_000, "👨‍🎓"),
        s(2, "Success Rate", 95, "📈"),
        s(3, "Expert Instructors", 50, "🏆"),
        s(4, "Countries Reached", 30, "🌎"),
    ]
}
