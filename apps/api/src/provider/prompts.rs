//! Prompt builders for the hosted provider's two model-backed operations.

use crate::models::project::ProjectContext;

fn field_or(value: &Option<String>, fallback: &str) -> String {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

/// Prompt for generating `count` project-specific interview questions.
pub fn questions_prompt(project: &ProjectContext, count: usize) -> String {
    let tech_list = project.tech_stack.join(", ");
    format!(
        "Generate {count} interview questions about this software project.\n\
         \n\
         PROJECT DETAILS:\n\
         - Name: {name}\n\
         - Description: {description}\n\
         - Tech Stack: {tech}\n\
         - Problem Solved: {problem}\n\
         - Architecture: {architecture}\n\
         - Challenges: {challenges}\n\
         \n\
         RULES:\n\
         1. Questions must be specific to THIS project, not generic\n\
         2. Mix difficulty levels across the set\n\
         3. Include at least one question about architecture/design decisions\n\
         4. Include at least one question about challenges faced\n\
         5. Questions should test DEEP understanding, not just facts\n\
         \n\
         Return ONLY a JSON array with this exact format:\n\
         [{{\"question\": \"...\", \"category\": \"overview|technical|architecture|challenge|tradeoffs|improvements\", \"difficulty\": \"easy|medium|hard\"}}]",
        count = count,
        name = project.name,
        description = field_or(&project.description, "Not provided"),
        tech = if tech_list.is_empty() { "Not specified".to_string() } else { tech_list },
        problem = field_or(&project.problem, "Not provided"),
        architecture = field_or(&project.architecture, "Not provided"),
        challenges = field_or(&project.challenges, "Not provided"),
    )
}

/// Prompt for scoring a candidate's answer against the five-dimension rubric.
pub fn evaluation_prompt(project: &ProjectContext, question: &str, answer: &str) -> String {
    let tech_list = project.tech_stack.join(", ");
    format!(
        "You are evaluating a candidate's answer about their own project.\n\
         \n\
         PROJECT CONTEXT:\n\
         - Name: {name}\n\
         - Description: {description}\n\
         - Tech Stack: {tech}\n\
         - Problem: {problem}\n\
         - Solution: {solution}\n\
         - Architecture: {architecture}\n\
         - Challenges: {challenges}\n\
         \n\
         QUESTION ASKED: \"{question}\"\n\
         \n\
         CANDIDATE'S ANSWER: \"{answer}\"\n\
         \n\
         EVALUATION CRITERIA (score 1-5 each):\n\
         1. completeness: Did they fully address the question?\n\
         2. accuracy: Is the technical content correct and consistent with project details?\n\
         3. clarity: Is the answer well-structured and easy to follow?\n\
         4. depth: Did they show deep understanding or just surface-level knowledge?\n\
         5. interviewReady: Would this impress in a real interview?\n\
         \n\
         IMPORTANT SCORING RULES:\n\
         - Score 1-2: Answer is vague, generic, or shows poor understanding\n\
         - Score 3: Basic answer, covers minimum requirements\n\
         - Score 4: Good answer with specific details\n\
         - Score 5: Excellent, would impress senior engineers\n\
         \n\
         BE STRICT. Random keywords or generic answers should score 1-2. Reward specificity and depth.\n\
         \n\
         Return ONLY valid JSON:\n\
         {{\n\
           \"scores\": {{\"completeness\": N, \"accuracy\": N, \"clarity\": N, \"depth\": N, \"interviewReady\": N}},\n\
           \"overallScore\": N.N,\n\
           \"feedback\": \"Specific feedback on what was good/bad\",\n\
           \"followUp\": \"A challenging follow-up question\",\n\
           \"coveredPoints\": [\"list of good points made\"],\n\
           \"missedPoints\": [\"what they should have mentioned\"]\n\
         }}",
        name = project.name,
        description = field_or(&project.description, "Not provided"),
        tech = if tech_list.is_empty() { "Not specified".to_string() } else { tech_list },
        problem = field_or(&project.problem, "Not provided"),
        solution = field_or(&project.solution, "Not provided"),
        architecture = field_or(&project.architecture, "Not provided"),
        challenges = field_or(&project.challenges, "Not provided"),
        question = question,
        answer = answer,
    )
}
