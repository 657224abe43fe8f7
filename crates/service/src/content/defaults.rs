use models::NewContentSection;
use serde_json::json;

/// Sections present on a fresh start, in display order.
pub fn default_sections() -> Vec<NewContentSection> {
    vec![
        NewContentSection {
            section: "about".into(),
            content: json!({
                "title": "About TechFlow Solutions",
                "description": "Founded with a vision to transform businesses through innovative technology solutions, TechFlow Solutions has emerged as a leading partner for companies seeking digital transformation. Our team of expert developers, architects, and consultants brings together decades of experience in delivering cutting-edge solutions.",
                "mission": "To empower businesses through innovative technology solutions and digital transformation strategies that drive sustainable growth.",
                "values": ["Innovation First", "Client Success", "Quality Excellence", "Continuous Learning"],
                "stats": {
                    "projectsDelivered": "250+",
                    "clientSatisfaction": "95%",
                    "teamMembers": "50+",
                    "yearsExperience": "8"
                }
            }),
        },
        NewContentSection {
            section: "contact".into(),
            content: json!({
                "email": "hello@techflowsolutions.com",
                "phone": "+1 (555) 123-4567",
                "address": "San Francisco, CA",
                "socialMedia": {
                    "linkedin": "#",
                    "twitter": "#",
                    "github": "#",
                    "instagram": "#"
                }
            }),
        },
    ]
}
