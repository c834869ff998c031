// All prompt templates for the Generation module.
// Placeholders are `{name}` and are filled by `generator::fill_template`.

/// Episode outline. Replace: {topic}, {duration}, {style}, {intro}, {segment_1},
/// {segment_2}, {segment_3}, {conclusion}
pub const OUTLINE_TEMPLATE: &str = r#"You are a professional podcast content creator. Create a clear and engaging podcast outline for:

Topic: {topic}
Duration: {duration} minutes
Style: {style}

Follow this EXACT format:

# [Write a catchy title here - max 60 chars]

## 📝 Episode Summary
[Write 2-3 clear sentences about what this episode covers]

## ⏰ Episode Timeline

### 1. Introduction ({intro})
• Opening Hook: [Write a strong hook]
• Topic Introduction
• Episode Goals

### 2. Main Segments

#### Segment 1: [Title] ({segment_1})
• Main Point 1
• Main Point 2
• Main Point 3
• Key Takeaway

#### Segment 2: [Title] ({segment_2})
• Main Point 1
• Main Point 2
• Main Point 3
• Key Takeaway

#### Segment 3: [Title] ({segment_3})
• Main Point 1
• Main Point 2
• Main Point 3
• Key Takeaway

### 3. Conclusion ({conclusion})
• Recap Key Points
• Call to Action
• Next Episode Preview

## 🎵 Production Notes
• Music Type:
• Sound Effects:
• Special Elements:

Remember:
1. Be specific and clear
2. Use engaging language
3. Keep points concise
4. Maintain consistent formatting"#;

/// Interview questions. Replace: {topic}, {guest_expertise}, {style}
pub const QUESTIONS_TEMPLATE: &str = r#"Create engaging interview questions for a podcast episode with the following details:
Topic: {topic}
Guest Expertise: {guest_expertise}
Style: {style}

Structure the response in this format using markdown:

# Interview Questions for [Topic]

## 🤝 Opening Questions (5-7 minutes)
[Questions to build rapport and set the tone]

## 🎯 Main Discussion (30-40 minutes)
[Core questions about the topic]

## 🌟 Lightning Round (5 minutes)
[Quick, fun questions to energize the conversation]

## 🎬 Closing Questions (5-10 minutes)
[Questions to wrap up and leave a lasting impression]

For each question, include:
- The question itself
- Purpose/goal of the question
- Potential follow-ups

Add timestamps and pacing suggestions where appropriate."#;

/// Episode title options. Replace: {topic}, {style}
pub const TITLES_TEMPLATE: &str = r#"Create 5 engaging podcast episode titles for the following topic:
Topic: {topic}
Style: {style}

Structure the response in this format using markdown:

# Title Options for [Topic]

For each title:
- The title (under 60 characters)
- Brief explanation of its appeal
- Style elements used
- Emotional hook

Make titles:
- Attention-grabbing
- SEO-friendly
- Easy to remember
- Mix of question-based and statement titles"#;

// Research reports. Each replaces: {topic}, {keywords}

pub const TRENDS_TEMPLATE: &str = r#"Create a clear, structured analysis of trends for the podcast topic:
Topic: {topic}
Keywords/Areas: {keywords}

Format your response in these clear sections:

# Executive Summary
• Brief overview of the topic (2-3 sentences)
• Key findings highlight (3-4 bullet points)

# Current Trends Analysis
## Major Trend 1: [Name]
• What it is
• Why it matters
• Key statistics
• Impact on the industry

## Major Trend 2: [Name]
• What it is
• Why it matters
• Key statistics
• Impact on the industry

## Major Trend 3: [Name]
• What it is
• Why it matters
• Key statistics
• Impact on the industry

# Emerging Patterns
## Pattern 1: [Name]
• Description
• Expected impact
• Timeline

## Pattern 2: [Name]
• Description
• Expected impact
• Timeline

# Content Opportunities
## Opportunity 1: [Name]
• Description
• Target audience
• Potential format
• Expected impact

## Opportunity 2: [Name]
• Description
• Target audience
• Potential format
• Expected impact

# Expert Insights
• Quote 1: [Expert name] - [Key point]
• Quote 2: [Expert name] - [Key point]
• Quote 3: [Expert name] - [Key point]

# Action Items
## Immediate Steps
• Action 1
• Action 2
• Action 3

## Long-term Strategy
• Strategy point 1
• Strategy point 2
• Strategy point 3"#;

pub const COMPETITORS_TEMPLATE: &str = r#"Create a clear, structured analysis of competitor content:
Topic: {topic}
Keywords/Areas: {keywords}

Format your response in these clear sections:

# Executive Summary
• Overview of competitive landscape
• Key findings (3-4 bullet points)

# Top Performing Content Analysis
## Category 1: [Content Type]
• What works
• Why it works
• Key examples
• Success metrics

## Category 2: [Content Type]
• What works
• Why it works
• Key examples
• Success metrics

# Content Gap Analysis
## Gap 1: [Area]
• Description
• Market need
• Opportunity size
• Potential approach

## Gap 2: [Area]
• Description
• Market need
• Opportunity size
• Potential approach

# Differentiation Opportunities
## Opportunity 1: [Name]
• Unique angle
• Target audience
• Content format
• Expected impact

## Opportunity 2: [Name]
• Unique angle
• Target audience
• Content format
• Expected impact

# Strategic Recommendations
## Short-term Actions
• Action 1
• Action 2
• Action 3

## Long-term Strategy
• Strategy 1
• Strategy 2
• Strategy 3"#;

pub const AUDIENCE_TEMPLATE: &str = r#"Create a clear, structured analysis of audience interests:
Topic: {topic}
Keywords/Areas: {keywords}

Format your response in these clear sections:

# Executive Summary
• Overview of audience analysis
• Key insights (3-4 bullet points)

# Audience Segments
## Segment 1: [Name]
• Demographics
• Key interests
• Content preferences
• Engagement patterns

## Segment 2: [Name]
• Demographics
• Key interests
• Content preferences
• Engagement patterns

# Common Questions Analysis
## Category 1: [Topic Area]
• Question 1
• Question 2
• Question 3
• How to address

## Category 2: [Topic Area]
• Question 1
• Question 2
• Question 3
• How to address

# Platform Analysis
## Platform 1: [Name]
• Audience presence
• Content performance
• Engagement metrics
• Best practices

## Platform 2: [Name]
• Audience presence
• Content performance
• Engagement metrics
• Best practices

# Content Strategy
## Content Types
• Type 1: [Description and approach]
• Type 2: [Description and approach]
• Type 3: [Description and approach]

## Engagement Strategy
• Strategy 1
• Strategy 2
• Strategy 3"#;

pub const GAPS_TEMPLATE: &str = r#"Create a clear, structured analysis of content gaps:
Topic: {topic}
Keywords/Areas: {keywords}

Format your response in these clear sections:

# Executive Summary
• Overview of content gap analysis
• Key findings (3-4 bullet points)

# Market Overview
## Current State
• Key players
• Content types
• Market trends
• Audience needs

# Content Gaps
## Gap 1: [Area]
• Description
• Market need
• Competition level
• Opportunity size

## Gap 2: [Area]
• Description
• Market need
• Competition level
• Opportunity size

# Opportunity Analysis
## Opportunity 1: [Name]
• Description
• Target audience
• Content approach
• Expected impact

## Opportunity 2: [Name]
• Description
• Target audience
• Content approach
• Expected impact

# Implementation Strategy
## Quick Wins
• Action 1
• Action 2
• Action 3

## Long-term Plan
• Strategy 1
• Strategy 2
• Strategy 3

# Success Metrics
• Metric 1: [Description and target]
• Metric 2: [Description and target]
• Metric 3: [Description and target]"#;
