//! The compiled-in portfolio files.
//!
//! Content pages are plain text. Commands like `about` and `cat about.txt`
//! both read from these constants so the two always agree.

use crate::FileTable;

pub const ABOUT_TXT: &str = r#"JOSEPH HUGHES - SENIOR SOFTWARE ENGINEER
===========================================

Hello! I'm Joseph Hughes, a UK-based Senior Software Engineer and Blockchain Specialist with 11+ years of experience in blockchain technologies.

EXPERIENCE:
- 11+ years in blockchain and Web3 development
- Specialized in smart contracts, DeFi protocols, and Web3 applications
- Led technical teams and delivered solutions with 140,000+ monthly active users
- Secured $650,000 in pre-seed funding for TowneSquare
- Involved in the Cryptosphere since 2013

CURRENT PROJECTS:
- Alpaca Network - Web3 Dex & Token Launcher with AI Inference platform
- InvestInsight - Track Web3, Stocks & Shares and property assets all in one place
- Decentratech - Various Web3 dApps
- Utmost Utopia - Car Dealership
- TM-Hub - Personal project for Trackmania community stats tracking

PASSION:
I love building innovative blockchain solutions and creating elegant systems that solve complex problems. 
When I'm not coding, you'll find me snowboarding or engaging with the gaming community.

TECHNICAL FOCUS:
- Blockchain and Web3 technologies (Solidity, Smart Contracts, DeFi)
- Full-stack development (React, Node.js, TypeScript, Python)
- Cloud infrastructure (AWS, Firebase)
- NFT marketplaces and tokenization
- Trading bots and automation

EDUCATION:
- Diploma of Higher Education Computer Science - Leeds Trinity University (2019-2023)
- BTEC Level 3 Extended Diploma Computer Science - Runshaw College (2017-2019)
- GCSE Computer Science - Leyland St Marys Catholic Technology College (2011-2017)

CERTIFICATIONS:
- Foundational Cloud Practitioner - Amazon Web Services

AWARDS:
- Social Media Chief Technology Officer of the Year 2024 - CEO Monthly"#;

pub const EXPERIENCE_TXT: &str = r#"PROFESSIONAL EXPERIENCE
====================

CURRENT PROJECTS:
-----------------

Tech Lead - Alpaca Network
Remote | Web3 Dex & Token Launcher with AI Inference Platform
- Building decentralized exchange and token launching platform
- Integrating AI inference capabilities for enhanced trading features
- Developing Web3 infrastructure for token launches and trading
- Status: Active Development

FOUNDER & CTO - InvestInsight
Remote | Multi-Asset Tracking Platform
- Building unified platform to track Web3, Stocks & Shares, and property assets
- Implementing social features for community engagement
- Developing portfolio management and analytics tools
- Status: Active Development

Web Developer - Utmost Utopia
Remote | Car Dealership Platform
- Building car dealership management and sales platform
- Developing inventory management and customer relationship systems
- Status: Active Development

FOUNDER & DEVELOPER - TM-Hub
Remote | Gaming Community Platform
- Personal project for Trackmania community
- Building player statistics and campaign tracking system
- Developing community features for Trackmania players
- Status: Active Development

CO-FOUNDER & CTO - Decentratech
Leeds, UK | Web3 Development Firm
- Launched Web3 development firm delivering cutting-edge blockchain solutions
- Led creation of innovative projects including trust-based games and Web3 dating app
- Designed and deployed cross-chain solutions for casinos and other dApps
- Built various Web3 dApps and blockchain integrations

PAST EXPERIENCE:
---------------

CHIEF TECHNOLOGY OFFICER (CTO) - Strike
Remote | Web3 Futures Exchange
- Promoted from Chief Blockchain Officer to CTO to oversee technical leadership
- Designed and implemented smart contracts managing all financial transactions
- Developed and maintained APIs supporting seamless data flow
- Spearheaded technology roadmap for football performance-based pricing platform
- Specialized in Web3 futures exchange for football performance trading

CHIEF TECHNOLOGY OFFICER (CTO) - TowneSquare Ltd
Remote | Web3 Social Media Platform
- Built Web3 social media platform and associated dApps
- Directed team of developers, achieving 140,000 monthly active users
- Delivered key features including NFT marketplace, loyalty tracker, and composable NFT collections
- Secured $650,000 in pre-seed funding
- Built on Aptos blockchain

DIRECTOR & FOUNDER - Decadent Blockchain Solutions
Remote | Web3 Mobile Gaming
- Brought Web3 Mobile Gaming to WAXP Network, based on EOS
- Developed mobile gaming platform with blockchain integration
- Implemented NFT and token mechanics for gaming experience

BLOCKCHAIN ENGINEER - NextColony
Remote | Web3 Space Resource Game
- Developed Web3 space resource game on STEEM blockchain
- Leveraged NFT technology for gameplay mechanics
- Designed blockchain integrations to enhance user engagement

DIRECTOR & FOUNDER - Mining Central
Leeds, UK | Cryptocurrency Mining Company
- Founded cryptocurrency mining company offering cloud-based mining solutions
- Negotiated hardware acquisitions and optimized mining processes
- Developed software platform enabling easy customer participation in cryptocurrency mining
- Brought mining to cloud for people to enter the industry without hardware

DIRECTOR & FOUNDER - Crypos
Remote | Masternode Platform
- Built platform bringing Masternodes to the masses through collaborative collateral funding
- Implemented auto-reinvesting of funds earned
- Enabled collaborative funding for masternode participation

TECHNICAL ANALYST & BOT DEVELOPER - SippyCupTrading
Remote | Trading Community Platform
- Provided technical analysis for community of 20,000 Discord members
- Built trading bots to automate investment strategies for crypto and forex
- Supported community by delivering insights and automated solutions
- Platform where users pay monthly subscription for premium investment advice

DEVELOPER - Personal Trading Bots
Remote | Automated Trading Systems
- Developed personal trading bots for use on Binance using Python
- Implemented automated trading strategies for cryptocurrency markets
- Built risk management and portfolio optimization features

DIRECTOR & FOUNDER - CSGO Gambling Platforms
Remote | Gaming Gambling Sites
- Founded and developed three successful CS:GO skins gambling platforms
- CSGORoyale: Roulette-based gambling platform
- CSGO-Pixels: Roulette, coinflip & jackpot platform
- CSGOBucks: Roulette & jackpot platform
- Implemented CS:GO skins as currency with various gambling mechanics

WRITER - UseHODL
Remote | Cryptocurrency Blog
- Wrote educational and informational blog posts surrounding cryptocurrency
- Covered blockchain technology, trading strategies, and market analysis
- Provided content for cryptocurrency community

INTERN - TriTech Ltd
Remote | Web Development
- Sole developer for Suicide Prevention UK website
- Project dedicated to mental health awareness and support
- Designed and built full-stack website ensuring user-friendly interface and robust backend

INTERN - Shoo Social Media
Leeds, UK | Marketing & SEO
- Gained hands-on experience in SEO and web development
- Enhanced website performance and traffic through technical optimisations
- Marketing company offering services to businesses across the UK

INTERN - ElbowSpace
Leeds, UK | Site Building Platform
- Worked on easy-to-use site-building tool tailored for student unions
- Developed Vue-based templates for accessible website creation
- Contributed to front-end and back-end integration
- Platform making site building easy for Student Unions across the UK"#;

pub const SKILLS_TXT: &str = r#"TECHNICAL SKILLS
===============

PROGRAMMING LANGUAGES:
- Python (11+ years) - Trading bots, automation, backend services
- JavaScript/TypeScript (11+ years) - Full-stack development
- Solidity - Smart contract development
- C++ - System-level programming
- SQL - Database queries and optimization

FRONTEND DEVELOPMENT:
- React - Modern UI development
- Vue.js - Component-based frameworks
- Next.js - Server-side rendering and static generation
- React Native - Mobile application development
- HTML5, CSS3, JavaScript (ES6+)

BACKEND DEVELOPMENT:
- Node.js - Server-side JavaScript runtime
- Express.js - Web application framework
- RESTful APIs - API design and development
- Microservices architecture - Scalable system design

BLOCKCHAIN & WEB3:
- Solidity, Move - Smart contract development and auditing (low level)
- Web3.js, Ethers.js - Blockchain interactions
- SolanaSDK, MoveSDK - Solana & Aptosblockchain development
- Cross-chain solutions - Multi-blockchain integrations
- NFT marketplaces and tokenization
- DeFi protocols and yield farming
- IPFS integration and decentralized storage

DATABASES & STORAGE:
- MongoDB - NoSQL database
- Firebase - Real-time database and backend services
- SQL databases - Relational database management

DEVOPS & CLOUD:
- AWS - Cloud infrastructure (EC2, S3, Lambda, RDS)
- Firebase - Backend-as-a-Service
- DevOps - CI/CD pipelines, automation
- GitHub - Version control, actions, and collaboration
- Linux server administration

SOFT SKILLS:
- Agile methodologies - Scrum, Kanban
- Project management - Team leadership and coordination
- Problem-solving - Complex technical challenges
- Technical writing - Documentation and communication
- Team leadership - Managing development teams

PERSONAL INTERESTS:
- Hardware knowledge - System architecture and optimization
- Snowboarding - Active outdoor enthusiast
- Ex-professional gamer - Competitive gaming background"#;

pub const PROJECTS_TXT: &str = r#"FEATURED PROJECTS
===============

CURRENT PROJECTS:
-----------------

ALPACA NETWORK
- Type: Web3 Dex & Token Launcher with AI Inference platform
- Description: Decentralized exchange and token launching platform with integrated AI capabilities
- Status: Active Development

INVESTINSIGHT
- Type: Multi-Asset Tracking Platform
- Description: Track Web3, Stocks & Shares and property assets all in one place, with social features
- Features: Unified asset tracking, social community, portfolio management
- Status: Active Development

DECENTRATECH
- Type: Web3 dApps Development
- Description: Various Web3 decentralized applications
- Status: Active Development

UTMOST UTOPIA
- Type: Car Dealership Platform
- Description: Car dealership management and sales platform
- Status: Active Development

TM-HUB
- Type: Gaming Community Platform
- Description: Personal project for Trackmania community tracking player and campaign stats
- Features: Player statistics, campaign tracking, community features
- Status: Active Development

PAST PROJECTS:
-------------

STRIKE
- Type: Web3 Futures Exchange
- Description: Web3 futures exchange specializing in football performance-based pricing
- Role: CTO (promoted from Chief Blockchain Officer)
- Tech: Smart contracts, APIs, blockchain integration
- Impact: Managed all financial transactions via smart contracts

MINING CENTRAL
- Type: Cryptocurrency Mining Company
- Description: Cloud-based mining solutions bringing mining to the cloud
- Role: Director & Founder
- Features: Software platform for easy customer participation
- Impact: Enabled people to enter mining industry without hardware

TOWNESQUARE
- Type: Web3 Social Media Platform
- Description: Web3 social media platform built on Aptos blockchain
- Role: CTO & Co-Founder
- Tech: React, Next.js, TypeScript, Solidity, Aptos
- Features: NFT marketplace, loyalty tracker, composable NFT collections
- Impact: 140,000 monthly active users, $650,000 pre-seed funding secured

DECADENT BLOCKCHAIN SOLUTIONS
- Type: Web3 Mobile Gaming
- Description: Bringing Web3 Mobile Gaming to WAXP Network, based on EOS
- Role: Director & Founder
- Features: Mobile gaming with blockchain integration

NEXTCOLONY
- Type: NFT Space Game
- Description: NFT Space Game based on STEEM blockchain
- Role: Blockchain Engineer
- Features: Web3 gameplay mechanics, NFT technology

CRYPOS
- Type: Masternode Platform
- Description: Bringing Masternodes to the masses through collaborative collateral funding
- Role: Director & Founder
- Features: Auto-reinvesting of funds earned, collaborative funding

SIPPYCUPTRADING
- Type: Investment Platform
- Description: Platform where users pay monthly subscription for premium investment advice
- Role: Technical Analyst & Bot Developer
- Features: Trading bots, technical analysis, 20,000+ Discord community

USEHODL
- Type: Cryptocurrency Blog
- Description: Blog posts surrounding cryptocurrency
- Role: Writer
- Content: Educational and informational articles

PERSONAL TRADING BOTS
- Type: Automated Trading
- Description: Personal trading bots for use on Binance using Python
- Features: Automated trading strategies, crypto trading

ELBOWSPACE
- Type: Site Building Platform
- Description: Platform making site building easy for Student Unions across the UK
- Role: Intern
- Tech: Vue.js
- Features: Easy-to-use templates for student unions

SHOO SOCIAL MEDIA
- Type: Marketing Platform
- Description: Marketing company offering services to businesses across the UK
- Role: Intern
- Features: SEO, web development, marketing services

TRITECH
- Type: Mental Health Website
- Description: Suicide Prevention UK site for charity
- Role: Intern & Sole Developer
- Features: Full-stack website, mental health awareness and support

CSGO GAMBLING PLATFORMS
- Type: Gaming Gambling Sites
- Description: Three successful CS:GO skins gambling platforms
- Role: Director & Founder
- Projects: CSGORoyale (roulette), CSGO-Pixels (roulette, coinflip & jackpot), CSGOBucks (roulette & jackpot)
- Features: CS:GO skins as currency, various gambling mechanics"#;

pub const CONTACT_TXT: &str = r#"CONTACT INFORMATION
=================

EMAIL: joe@investinsight.io
LOCATION: Leeds, UK

SOCIAL LINKS:
LINKEDIN: https://www.linkedin.com/in/jhughes-dev/
GITHUB: https://github.com/d2Dreamer
WEBSITE: https://jhugh.es
DISCORD: d2dreamer

AVAILABILITY:
- Currently open to remote roles
- Available for freelance projects
- Interested in Web3 and blockchain opportunities
- Remote work preferred
- Full-time and part-time consulting available

RESPONSE TIME:
- Email: Within 24 hours
- LinkedIn: Within 48 hours
- Discord: Usually online
- GitHub: Check commits for activity

RESUME: Available upon request
CV: View detailed CV online or request via email

PREFERRED CONTACT METHODS:
1. Discord (quick communication and community engagement)
2. Email (best for detailed discussions and opportunities)
2. LinkedIn (professional networking)
3. GitHub (technical collaboration and code review)
4. WhatsApp (for urgent or time-sensitive discussions)"#;

pub const HELP_TXT: &str = r#"AVAILABLE COMMANDS
=================

FILE OPERATIONS:
ls                    - List all available files
cat <filename>        - Display file contents
tree                  - Show directory structure

NAVIGATION:
pwd                   - Show current directory
whoami                - Display current user
date                  - Show current date and time
uptime                - Show system uptime

CONTENT PAGES:
about                 - Show about information
experience            - Show work experience
skills                - Show technical skills
projects              - List all projects
contact               - Show contact details

SOCIAL LINKS:
github                - Open GitHub profile
linkedin              - Open LinkedIn profile
email                 - Show email address
social                - Show all social media links
resume/cv             - Download resume

SYSTEM COMMANDS:
version               - Show version information
neofetch              - Display system information
status                - Show portfolio status
intro/welcome         - Show welcome message
clear                 - Clear the console
help [command]        - Show this help message or details for one command

FUN:
matrix                - Enter the matrix
hack                  - Run a (harmless) intrusion script

KEYS:
Up/Down               - Recall previous/next command
Tab                   - Accept the suggested completion

EXAMPLES:
$ cat about.txt
$ ls
$ neofetch
$ github
$ social
$ status
$ clear"#;

pub const README_MD: &str = r#"JOSEPH HUGHES - PORTFOLIO
========================

Welcome to my interactive console portfolio!

This is a terminal-style CV written in Rust.

QUICK START
-----------
- Type 'help' to see available commands
- Use 'ls' to list all files
- Use 'cat <filename>' to read files
- Type 'clear' to reset the console

NAVIGATION
----------
- about.txt      - Personal information
- experience.txt - Work history
- skills.txt     - Technical skills
- projects.txt   - Featured projects
- contact.txt    - Contact information

Enjoy exploring!"#;

/// Build the portfolio file table in listing order.
pub fn portfolio_files() -> FileTable {
    let mut table = FileTable::new();
    table.insert("about.txt", ABOUT_TXT);
    table.insert("experience.txt", EXPERIENCE_TXT);
    table.insert("skills.txt", SKILLS_TXT);
    table.insert("projects.txt", PROJECTS_TXT);
    table.insert("contact.txt", CONTACT_TXT);
    table.insert("help.txt", HELP_TXT);
    table.insert("README.md", README_MD);
    table
}
