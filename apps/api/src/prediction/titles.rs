//! The fixed job-title allow-list the model was trained on.
//!
//! `POST /predictsalary` rejects titles outside this list; `GET /job-titles`
//! exposes it for client dropdowns. Entries match the training data verbatim,
//! so the list only changes alongside a retrained model artifact.

pub const JOB_TITLES: &[&str] = &[
    "Software Engineer",
    "Senior Software Engineer",
    "Frontend Developer",
    "Backend Developer",
    "Full Stack Developer",
    "Web Developer",
    "Mobile App Developer",
    "Data Scientist",
    "Data Analyst",
    "Data Engineer",
    "Machine Learning Engineer",
    "DevOps Engineer",
    "Cloud Engineer",
    "Network Engineer",
    "Security Analyst",
    "Business Analyst",
    "QA Engineer",
    "Software Tester",
    "UI/UX Designer",
    "Graphic Designer",
    "Product Manager",
    "Project Manager",
    "Engineering Manager",
    "IT Manager",
    "Software Architect",
    "Solutions Architect",
    "Technical Support Engineer",
    "IT Support Technician",
    "Database Administrator",
];

pub fn is_known_title(job_title: &str) -> bool {
    JOB_TITLES.contains(&job_title)
}
