//! Static marketing copy for the landing surface
//!
//! All of the studio's presentation text lives here as typed tables so
//! the views can iterate it instead of embedding prose in draw code.

pub const STUDIO_NAME: &str = "Full Stack Studios";
pub const TAGLINE: &str = "Transforming ideas into powerful, scalable solutions.";

pub const HERO_HEADLINE: &str = "Where Imagination Meets Innovation";
pub const HERO_SUBTITLE: &str = "From concept to market-ready product, we craft seamless \
applications across web, mobile, and desktop platforms.";

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "Full Stack Studios is a premier software development company dedicated to turning \
innovative ideas into powerful, scalable solutions. With a team of experienced developers, \
designers, and project managers, we specialize in creating custom applications that drive \
business growth and enhance user experiences.",
    "Our commitment to quality, attention to detail, and passion for cutting-edge technology \
sets us apart in the industry. Whether you're a startup looking to disrupt the market or an \
established enterprise seeking digital transformation, Full Stack Studios has the expertise \
to bring your vision to life.",
];

/// Headline figures shown beside the about copy
pub const STATS: [(&str, &str); 4] = [
    ("50+", "Expert Developers"),
    ("200+", "Projects Completed"),
    ("98%", "Client Satisfaction"),
    ("24/7", "Support"),
];

pub struct ExpertiseArea {
    pub title: &'static str,
    pub body: &'static str,
}

pub const EXPERTISE: [ExpertiseArea; 2] = [
    ExpertiseArea {
        title: "Software Development",
        body: "Our team excels in a wide range of programming languages including JavaScript, \
Python, Java, and C#. We've successfully delivered complex web applications, mobile apps for \
iOS and Android, and robust desktop software. Our recent project for a fintech startup \
involved building a scalable, blockchain-based payment system using Node.js and React.",
    },
    ExpertiseArea {
        title: "Project Management",
        body: "Our certified project managers use agile methodologies to ensure smooth project \
execution. We recently completed a large-scale e-commerce platform migration for a retail \
giant, delivering the project on time and under budget. Our team's expertise in risk \
management and stakeholder communication was crucial in navigating the complexities of this \
project.",
    },
];

pub struct ServiceOffering {
    pub title: &'static str,
    pub body: &'static str,
}

pub const SERVICE_OFFERINGS: [ServiceOffering; 3] = [
    ServiceOffering {
        title: "Comprehensive Feature Development",
        body: "We recently developed an AI-powered recommendation engine for a streaming \
service, significantly improving user engagement. Our iterative development process ensured \
each feature was thoroughly tested and optimized before release.",
    },
    ServiceOffering {
        title: "IT Infrastructure & Server Management",
        body: "For a healthcare provider, we designed and implemented a HIPAA-compliant cloud \
infrastructure, reducing operational costs by 40% while improving system reliability and \
security. Our 24/7 monitoring ensures optimal performance and rapid response to any issues.",
    },
    ServiceOffering {
        title: "Thorough Documentation",
        body: "We created comprehensive API documentation and user guides for a SaaS platform, \
resulting in a 50% reduction in support tickets. Our documentation includes interactive \
examples, video tutorials, and regularly updated changelogs to keep clients informed of all \
updates and new features.",
    },
];

pub struct PortfolioItem {
    pub title: &'static str,
    pub description: &'static str,
}

pub const PORTFOLIO: [PortfolioItem; 6] = [
    PortfolioItem {
        title: "E-commerce Platform",
        description: "A scalable, feature-rich online marketplace built with React and \
Node.js, processing over 10,000 transactions daily.",
    },
    PortfolioItem {
        title: "Mobile Banking App",
        description: "A secure, user-friendly mobile banking application developed for iOS \
and Android using React Native.",
    },
    PortfolioItem {
        title: "AI-Powered Analytics Dashboard",
        description: "An intelligent analytics platform using machine learning algorithms to \
provide real-time business insights.",
    },
    PortfolioItem {
        title: "IoT Fleet Management System",
        description: "A comprehensive IoT solution for real-time tracking and management of \
large vehicle fleets.",
    },
    PortfolioItem {
        title: "Telemedicine Platform",
        description: "A HIPAA-compliant telemedicine solution enabling secure video \
consultations and electronic health records management.",
    },
    PortfolioItem {
        title: "Augmented Reality Training App",
        description: "An innovative AR application for industrial training, improving \
learning outcomes and reducing on-site accidents.",
    },
];

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        quote: "Full Stack Studios delivered an exceptional e-commerce platform that exceeded \
our expectations. Their team's expertise and dedication were evident throughout the entire \
process. Our online sales have increased by 200% since launch.",
        author: "Sarah Johnson",
        role: "CEO, Fashion Frontier",
    },
    Testimonial {
        quote: "The mobile banking app developed by Full Stack Studios has revolutionized our \
customer experience. Their attention to security and user experience is unparalleled. We've \
seen a 150% increase in mobile transactions since the app's release.",
        author: "Michael Chang",
        role: "CTO, SecureBank",
    },
    Testimonial {
        quote: "The AI-powered analytics dashboard created by Full Stack Studios has \
transformed our decision-making process. We now have real-time insights that have improved \
our operational efficiency by 35%. Their team's technical prowess is truly impressive.",
        author: "Emily Rodriguez",
        role: "Data Science Lead, InsightCorp",
    },
    Testimonial {
        quote: "Full Stack Studios' IoT fleet management system has been a game-changer for \
our logistics operations. We've reduced fuel costs by 25% and improved delivery times by \
40%. Their ongoing support and continuous improvements are invaluable to our business.",
        author: "David Patel",
        role: "Operations Manager, GlobalFreight",
    },
];

pub const CONTACT_ADDRESS: &str = "123 Tech Street, Silicon Valley, CA 94000";
pub const CONTACT_EMAIL: &str = "contact@fullstackstudios.com";
pub const CONTACT_PHONE: &str = "+1 (555) 123-4567";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_tables_are_populated() {
        assert_eq!(STATS.len(), 4);
        assert_eq!(PORTFOLIO.len(), 6);
        assert_eq!(TESTIMONIALS.len(), 4);
        assert!(PORTFOLIO.iter().all(|item| !item.description.is_empty()));
        assert!(TESTIMONIALS.iter().all(|t| !t.quote.is_empty()));
    }
}
