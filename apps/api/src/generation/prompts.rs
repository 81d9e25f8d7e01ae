// All LLM prompt templates for the generation module.
// Placeholders are `{name}`, substituted by `fill` in a single pass.

/// Substitutes `{key}` placeholders. Unknown `{...}` groups are left untouched.
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) => {
                let key = &after[..end];
                if let Some((_, value)) = values.iter().find(|(k, _)| *k == key) {
                    out.push_str(value);
                    rest = &after[end + 1..];
                } else {
                    out.push('{');
                    rest = after;
                }
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

/// Replace: {name}
pub const GREETING_PROMPT_TEMPLATE: &str = "\
Please, write a greeting for person named '{name}'.
It should be short and funny.";

/// Replace: {job_text}
pub const JOB_EXTRACT_PROMPT_TEMPLATE: &str = r#"Extract the structured details of the job posting below.

Return a JSON object with this EXACT schema (no extra fields):
{
  "is_job_description": true,
  "company_name": "SomeCorp Ltd",
  "company_address": "Mockers avenue 48",
  "company_city": "Berlin",
  "company_postal_code": "03523",
  "recruiter_name": "",
  "title": "Senior Software Engineer",
  "description": "Mandatory 10 years of experience with Python; architectural knowledge recommended."
}

Rules:
- Use an empty string for any field the posting does not mention. Never guess.
- Put everything that does not fit a specific field (responsibilities, requirements, benefits) into "description", concisely.
- If the text is not a job posting at all, return {"is_job_description": false} and nothing else.

JOB POSTING:
{job_text}"#;

pub const CV_BASELINE_SYSTEM: &str = "You are an expert CV generator. Take the user's structured data \
(Work Experience, Education, Skills, Projects) and format it into a professional CV. \
Focus on achievements and quantify results where possible.";

pub const CV_USA_SYSTEM: &str = "You are an expert American resume writer.

Format: Generate a strict one-page document. If the content is too long, you must aggressively summarize it.

Title: Do not title the document 'CV' or 'Resume'. Start directly with the user's name in a large font.

Personal Info: STRIP ALL personal data. Do NOT include a photo, date of birth, marital status, nationality, or full address (city and state only is acceptable).

Summary: Start with a 3-4 line 'Professional Summary' that acts as a sales pitch, highlighting top achievements.

Tone: Use a confident, active, and high-impact tone. Start all bullet points with strong 'power words' (e.g., 'Spearheaded,' 'Orchestrated,' 'Accelerated,' 'Quantified').

Content: Focus heavily on quantifiable achievements (e.g., 'Increased sales by 20%') rather than just listing responsibilities.";

pub const CV_UK_SYSTEM: &str = "You are an expert British CV writer.

Format: Generate a two-page document. It is acceptable and expected to use the space to be comprehensive.

Title: Title the document 'Curriculum Vitae'.

Personal Info: STRIP ALL personal data. Do NOT include a photo, date of birth, marital status, or nationality. A phone number, email, and LinkedIn profile are sufficient.

Summary: Start with a 4-5 line 'Personal Statement' written in the first person, describing the candidate's professional identity, skills, and career goals (e.g., 'I am a highly motivated marketing manager...').

Tone: Use a formal, professional, and descriptive tone. Full sentences are acceptable in descriptions.

Spelling: Use British English spellings (e.g., 'organisation,' 'analyse,' 'labour').

References: Conclude the CV with the line: 'References available upon request.'";

pub const CV_GERMANY_SYSTEM: &str = "You are an expert writer for a German Lebenslauf.

Format: Generate a 1-2 page document in a clean, structured, tabular format.

Title: Title the document 'Lebenslauf'.

Personal Info: Create a prominent 'Persönliche Daten' (Personal Details) section. Include fields for Date of Birth ('Geburtsdatum'), Nationality ('Nationalität'), and Marital Status ('Familienstand'), as the user provided them. Include a placeholder for a professional photo at the top right of the document.

Structure: The document must be in strict reverse-chronological order ('Berufserfahrung' - Work, 'Ausbildung' - Education).

Completeness: It is critical to show no unexplained time gaps. If gaps exist in the user's data, highlight them for the user to fill in.

Tone: Use a formal, factual, and direct tone. Avoid marketing 'fluff' or overly enthusiastic language. Stick to facts and responsibilities.

Signature: End the document with a placeholder for a 'Date, City, and Signature'.";

pub const CV_JAPAN_SYSTEM: &str = "You are an expert in Japanese hiring formats. You will generate two documents.

Document 1: Rirekisho (履歴書) Data

Format: This is a very strict, standardized form. You must generate data to fill this form.

Personal Info: Include Date of Birth, Gender, and Full Address. Require a professional photo (include a placeholder).

Order: The 'Education' and 'Work History' sections MUST be in chronological order (oldest to newest), NOT reverse-chronological.

Content: Include fields for 'Reason for Applying' ('志望動機') and 'Personal Hobbies/Skills' ('趣味・特技').

Document 2: Shokumu Keirekisho (職務経歴書)

Format: This is a free-form document, unlike the Rirekisho.

Order: This document should be reverse-chronological (newest to oldest).

Content: For each job, provide a summary of the company, the candidate's role, and a detailed, bulleted list of responsibilities and achievements. This is where the user's accomplishments are detailed.";

pub const CV_INDIA_SYSTEM: &str = "You are an expert Indian resume writer.

Format: The resume can be two or more pages. Do not summarize aggressively; detail is valued.

Personal Info: Include a 'Personal Profile' or 'Biodata' section at the top. Include fields for Date of Birth, Gender, Marital Status, and Nationality, as provided by the user. A professional photo is common; include a placeholder.

Summary: Start with a 'Career Objective' or 'Professional Summary' that outlines the candidate's goals and key skills.

Content: Place a strong emphasis on the 'Education' and 'Technical Skills' sections. List degrees, universities, and grades/scores prominently. It is common to include a 'Declaration' at the end (e.g., 'I hereby declare that the information given above is true to the best of my knowledge.') followed by a 'Date' and 'Place' placeholder.";

/// Replace: {full_name}, {email}, {location}, {phone}, {linkedin}, {github},
///          {website}, {other_url}, {about_me}, {education}, {experience},
///          {company}, {position}, {job_description}
pub const CV_PROMPT_TEMPLATE: &str = "\
Use the candidate information below to produce a localized CV tailored to the target role. \
Structure the response as a complete document and focus on relevance to the job description.

CANDIDATE INFORMATION:
Full Name: {full_name}
Email: {email}
Location: {location}
Phone: {phone}
LinkedIn: {linkedin}
GitHub: {github}
Personal Website: {website}
Other URL: {other_url}
About Me: {about_me}

EDUCATION:
{education}

WORK EXPERIENCE:
{experience}

TARGET JOB:
Company: {company}
Position: {position}
Job Description: {job_description}

Return only the completed document.";

/// Replace: {title}, {company}, {job_description}, {full_name}, {about_me},
///          {education}, {experience}
pub const REVIEW_PROMPT_TEMPLATE: &str = "\
Analyze this candidate for a job match and provide a score from 0-100 and suggestions.

Job Title: {title}
Company: {company}
Job Description: {job_description}

Candidate Information:
Name: {full_name}
About: {about_me}

Education:
{education}

Experience:
{experience}

Please provide:
1. A match score between 0-100
2. 3-5 specific, skills-related suggestions for how the candidate can improve their chances

Format your response as follows:
SCORE: [number]
SUGGESTIONS:
- [suggestion 1]
- [suggestion 2]
- [suggestion 3]";

/// Replace: {title}, {company}, {job_description}, {full_name}, {about_me},
///          {education}, {experience}
pub const GAP_ANALYSIS_PROMPT_TEMPLATE: &str = "\
Analyze this candidate's profile against the job requirements and identify experience or responsibility gaps.

Job Title: {title}
Company: {company}
Job Description: {job_description}

Candidate Information:
Name: {full_name}
About: {about_me}

Education:
{education}

Experience:
{experience}

Identify SMALL experience or responsibility gaps where the candidate is missing information.
Focus on borderline opportunities - gaps that could be filled with more details in their profile.

Categorize each gap by severity:
- CRITICAL: Must-have requirements that are completely missing (deal-breakers)
- IMPORTANT: Strong requirements with weak or missing evidence
- NICE-TO-HAVE: Additional improvements for a stronger candidacy

For each gap, provide:
1. What is missing or weak
2. Specific suggestion on where/how to add more information

Provide 3-7 total gaps across all severity levels.

Format your response EXACTLY as follows:
CRITICAL:
- [gap description] | [specific suggestion]

IMPORTANT:
- [gap description] | [specific suggestion]
- [gap description] | [specific suggestion]

NICE-TO-HAVE:
- [gap description] | [specific suggestion]";

/// Replace: {style}, {name}, {email}, {phone}, {location}, {summary},
///          {job_details}, {recruiter}, {company}, {notes}, {date}, {job_title},
///          {plain_output}
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = "\
Please write a complete cover letter in a {style} style.

**Applicant Information:**
- Name: {name}
- Email: {email}
- Phone: {phone}
- Current Location: {location}
- Personal Summary/About Me: {summary}

**Job Details:**
{job_details}

**Company Contact (for salutation):**
- Contact Person: {recruiter}
- Company Name: {company}

**Additional Notes/Instructions from Applicant:**
{notes}

**Task:**
Generate a full, ready-to-send cover letter. The letter should be well-structured and include:
1.  Applicant's Contact Information (e.g., {name}, {email}, {phone} at the top or bottom).
2.  Date: {date}.
3.  Recipient's Details: {recruiter}, {company}. (If a company address is available from the job details, it can be included; otherwise, omit.)
4.  Salutation (e.g., \"Dear {recruiter},\").
5.  Introduction: Clearly state you are applying for the {job_title} at {company}.
6.  Body Paragraphs:
    - Express strong interest in the role and {company}.
    - Highlight how your skills and experiences (from your Personal Summary: \"{summary}\") match the job's requirements and responsibilities. Be specific and provide examples if possible.
    - Explain why you are a good fit for the company culture and this specific role.
    - If provided, subtly weave in points from the 'Additional Notes'.
7.  Conclusion: Reiterate your enthusiasm for the opportunity and state your availability for an interview or further discussion.
8.  Closing (e.g., \"Sincerely,\" or \"Yours faithfully,\").
9.  Your Typed Name: {name}.

**Important Instructions:**
- The tone must be strictly {style}.
- Do not use placeholders (e.g., '[Your Address]', '[Company Address]'). If specific information is not available, omit it or rephrase the content so that it appears complete and professional without it. The final version must look polished and ready to use as-is.
- Ensure the letter is professional, grammatically correct, and flows naturally.
- {plain_output}";

/// Replace: {style}, {achievement}, {context}, {plain_output}
pub const ACHIEVEMENT_PROMPT_TEMPLATE: &str = "\
Please rewrite the following achievement statement to make it more impactful and professional.
Focus on making it {style} in style.

**Original Achievement Statement:**
\"{achievement}\"

**Additional Context (if provided):**
{context}

**Task:**
Rewrite the achievement statement following these guidelines:

1. **Make it quantifiable**: If possible, include specific numbers, percentages, or metrics to demonstrate impact.
2. **Use strong action verbs**: Start with powerful verbs like \"Led\", \"Implemented\", \"Achieved\", \"Optimized\", etc.
3. **Focus on results**: Emphasize outcomes and benefits rather than just activities.
4. **Be concise yet comprehensive**: Keep it impactful but not verbose.
5. **Maintain truthfulness**: Do not add information that isn't implied in the original statement.

**Style-specific instructions:**
- **professional**: Formal, business-appropriate language suitable for resumes/CVs
- **concise**: Short and to the point while maintaining impact
- **impactful**: Emphasize the significance and scale of the achievement
- **quantitative**: Focus heavily on metrics and measurable outcomes

**Important:**
- {plain_output}
- Keep it as a single, well-crafted sentence or short paragraph.
- Ensure it's ready to use in a resume or professional context.";
