//! Built-in calculator tables
//!
//! One table per category. The tables are authoritative; [`TABLES`] lists
//! them in catalog order and [`super::Catalog::builtin`] unions them.

use super::categories::CategoryId;
use super::CalculatorDescriptor as C;

// ============================================================================
// Finance
// ============================================================================

pub const FINANCE: &[C] = &[
    C::new(
        "loan-calculator",
        "Loan Calculator",
        "Calculate monthly payments, total interest, and loan details",
        CategoryId::Finance,
        &["loan", "payment", "interest", "finance", "monthly"],
        "💰",
    )
    .featured(),
    C::new(
        "mortgage-calculator",
        "Mortgage Calculator",
        "Calculate mortgage payments and amortization schedule",
        CategoryId::Finance,
        &["mortgage", "home", "payment", "interest", "property"],
        "🏠",
    )
    .featured(),
    C::new(
        "compound-interest",
        "Compound Interest Calculator",
        "Calculate compound interest and investment growth",
        CategoryId::Finance,
        &["compound", "interest", "investment", "growth", "savings"],
        "📈",
    ),
    C::new(
        "simple-interest",
        "Simple Interest Calculator",
        "Calculate simple interest on loans and investments",
        CategoryId::Finance,
        &["simple", "interest", "loan", "investment"],
        "📊",
    ),
    C::new(
        "currency-converter",
        "Currency Converter",
        "Convert between different currencies with live rates",
        CategoryId::Finance,
        &["currency", "exchange", "convert", "money", "forex"],
        "💱",
    )
    .featured()
    .requires_api(),
    C::new(
        "savings-goal",
        "Savings Goal Calculator",
        "Calculate how much to save to reach your financial goals",
        CategoryId::Finance,
        &["savings", "goal", "target", "monthly", "plan"],
        "🎯",
    ),
    C::new(
        "credit-card-payoff",
        "Credit Card Payoff Calculator",
        "Calculate time and interest to pay off credit card debt",
        CategoryId::Finance,
        &["credit", "card", "debt", "payoff", "interest"],
        "💳",
    ),
    C::new(
        "retirement-savings",
        "Retirement Savings Calculator",
        "Plan your retirement savings and calculate future value",
        CategoryId::Finance,
        &["retirement", "savings", "pension", "future", "planning"],
        "👴",
    ),
    C::new(
        "salary-to-hourly",
        "Salary to Hourly Calculator",
        "Convert annual salary to hourly wage",
        CategoryId::Finance,
        &["salary", "hourly", "wage", "convert", "annual"],
        "💼",
    ),
    C::new(
        "hourly-to-salary",
        "Hourly to Salary Calculator",
        "Convert hourly wage to annual salary",
        CategoryId::Finance,
        &["hourly", "salary", "wage", "convert", "annual"],
        "⏰",
    ),
    C::new(
        "roi-calculator",
        "ROI Calculator",
        "Calculate return on investment and annualized returns",
        CategoryId::Finance,
        &["roi", "return", "investment", "profit", "gain"],
        "💹",
    ),
    C::new(
        "budget-planner",
        "Budget Planner",
        "Plan monthly income against expenses and savings",
        CategoryId::Finance,
        &["budget", "expenses", "income", "planner", "monthly"],
        "🧾",
    ),
    C::new(
        "net-worth",
        "Net Worth Calculator",
        "Total your assets and liabilities to find your net worth",
        CategoryId::Finance,
        &["net", "worth", "assets", "liabilities", "wealth"],
        "🏦",
    ),
    C::new(
        "loan-emi-calculator",
        "Loan EMI Calculator",
        "Calculate equated monthly installments for a loan",
        CategoryId::Finance,
        &["emi", "installment", "loan", "monthly", "payment"],
        "📆",
    ),
];

// ============================================================================
// Health & Fitness
// ============================================================================

pub const HEALTH: &[C] = &[
    C::new(
        "bmi-calculator",
        "BMI Calculator",
        "Calculate Body Mass Index and health category",
        CategoryId::Health,
        &["bmi", "body", "mass", "index", "weight", "health"],
        "⚖️",
    )
    .featured(),
    C::new(
        "bmr-calculator",
        "BMR Calculator",
        "Calculate Basal Metabolic Rate and daily calories",
        CategoryId::Health,
        &["bmr", "metabolic", "rate", "calories", "energy"],
        "🔥",
    ),
    C::new(
        "calorie-intake",
        "Calorie Intake Calculator",
        "Calculate daily calorie needs based on activity level",
        CategoryId::Health,
        &["calorie", "intake", "daily", "nutrition", "diet"],
        "🍎",
    )
    .featured(),
    C::new(
        "body-fat-percentage",
        "Body Fat Percentage Calculator",
        "Estimate body fat percentage using measurements",
        CategoryId::Health,
        &["body", "fat", "percentage", "fitness", "composition"],
        "📏",
    ),
    C::new(
        "water-intake",
        "Water Intake Calculator",
        "Calculate daily water intake recommendations",
        CategoryId::Health,
        &["water", "intake", "hydration", "daily", "health"],
        "💧",
    ),
    C::new(
        "ideal-weight",
        "Ideal Weight Calculator",
        "Calculate ideal weight based on height and frame",
        CategoryId::Health,
        &["ideal", "weight", "height", "healthy", "target"],
        "🎯",
    ),
    C::new(
        "heart-rate-zone",
        "Heart Rate Zone Calculator",
        "Calculate target heart rate zones for exercise",
        CategoryId::Health,
        &["heart", "rate", "zone", "exercise", "cardio"],
        "❤️",
    ),
    C::new(
        "pregnancy-due-date",
        "Pregnancy Due Date Calculator",
        "Calculate pregnancy due date and milestones",
        CategoryId::Health,
        &["pregnancy", "due", "date", "baby", "conception"],
        "🤱",
    ),
    C::new(
        "ovulation-calculator",
        "Ovulation Calculator",
        "Calculate ovulation and fertile window dates",
        CategoryId::Health,
        &["ovulation", "fertile", "cycle", "conception", "period"],
        "🌸",
    ),
    C::new(
        "blood-alcohol",
        "Blood Alcohol Calculator",
        "Estimate blood alcohol content and sobering time",
        CategoryId::Health,
        &["blood", "alcohol", "bac", "drinking", "safety"],
        "🍷",
    ),
    C::new(
        "tdee-calculator",
        "TDEE Calculator",
        "Estimate total daily energy expenditure from activity level",
        CategoryId::Health,
        &["tdee", "energy", "expenditure", "calories", "activity"],
        "🏃",
    ),
    C::new(
        "body-surface-area",
        "Body Surface Area Calculator",
        "Calculate body surface area from height and weight",
        CategoryId::Health,
        &["body", "surface", "area", "bsa", "dosage"],
        "🧍",
    ),
    C::new(
        "pregnancy-weight-gain",
        "Pregnancy Weight Gain Calculator",
        "Track recommended weight gain during pregnancy",
        CategoryId::Health,
        &["pregnancy", "weight", "gain", "trimester", "bmi"],
        "🤰",
    ),
];

// ============================================================================
// Math & Geometry
// ============================================================================

pub const MATH: &[C] = &[
    C::new(
        "percentage-calculator",
        "Percentage Calculator",
        "Calculate percentages, increases, and decreases",
        CategoryId::Math,
        &["percentage", "percent", "increase", "decrease", "math"],
        "%",
    )
    .featured(),
    C::new(
        "fraction-to-decimal",
        "Fraction to Decimal Converter",
        "Convert fractions to decimal numbers",
        CategoryId::Math,
        &["fraction", "decimal", "convert", "math", "number"],
        "½",
    ),
    C::new(
        "decimal-to-fraction",
        "Decimal to Fraction Converter",
        "Convert decimal numbers to fractions",
        CategoryId::Math,
        &["decimal", "fraction", "convert", "math", "number"],
        "0.5",
    ),
    C::new(
        "circle-area",
        "Circle Area Calculator",
        "Calculate area and circumference of a circle",
        CategoryId::Math,
        &["circle", "area", "circumference", "radius", "geometry"],
        "⭕",
    ),
    C::new(
        "triangle-area",
        "Triangle Area Calculator",
        "Calculate area of triangles using various methods",
        CategoryId::Math,
        &["triangle", "area", "base", "height", "geometry"],
        "🔺",
    ),
    C::new(
        "rectangle-area",
        "Rectangle Area Calculator",
        "Calculate area and perimeter of rectangles",
        CategoryId::Math,
        &["rectangle", "area", "perimeter", "length", "width"],
        "▭",
    ),
    C::new(
        "sphere-volume",
        "Sphere Volume Calculator",
        "Calculate volume and surface area of a sphere",
        CategoryId::Math,
        &["sphere", "volume", "surface", "area", "radius"],
        "🌐",
    ),
    C::new(
        "cylinder-volume",
        "Cylinder Volume Calculator",
        "Calculate volume and surface area of a cylinder",
        CategoryId::Math,
        &["cylinder", "volume", "surface", "area", "radius", "height"],
        "🥫",
    ),
    C::new(
        "pythagorean-theorem",
        "Pythagorean Theorem Calculator",
        "Calculate missing side of right triangles",
        CategoryId::Math,
        &["pythagorean", "theorem", "triangle", "hypotenuse", "right"],
        "📐",
    ),
    C::new(
        "square-root",
        "Square Root Calculator",
        "Calculate square roots and perfect squares",
        CategoryId::Math,
        &["square", "root", "sqrt", "math", "calculation"],
        "√",
    ),
    C::new(
        "quadratic-solver",
        "Quadratic Equation Solver",
        "Solve quadratic equations and find real or complex roots",
        CategoryId::Math,
        &["quadratic", "equation", "roots", "solver", "algebra"],
        "x²",
    ),
    C::new(
        "exponent-calculator",
        "Exponent Calculator",
        "Raise numbers to any power, including fractional exponents",
        CategoryId::Math,
        &["exponent", "power", "base", "math"],
        "ⁿ",
    ),
];

// ============================================================================
// Unit Converters
// ============================================================================

pub const CONVERSION: &[C] = &[
    C::new(
        "temperature-converter",
        "Temperature Converter",
        "Convert between Celsius, Fahrenheit, and Kelvin",
        CategoryId::Conversion,
        &["temperature", "celsius", "fahrenheit", "kelvin", "convert"],
        "🌡️",
    )
    .featured(),
    C::new(
        "length-converter",
        "Length Converter",
        "Convert between metric and imperial length units",
        CategoryId::Conversion,
        &["length", "distance", "meter", "feet", "inch", "mile"],
        "📏",
    ),
    C::new(
        "weight-converter",
        "Weight Converter",
        "Convert between kilograms, pounds, ounces, and stones",
        CategoryId::Conversion,
        &["weight", "mass", "kilogram", "pound", "ounce"],
        "⚖️",
    ),
    C::new(
        "speed-converter",
        "Speed Converter",
        "Convert between km/h, mph, m/s, and knots",
        CategoryId::Conversion,
        &["speed", "velocity", "kmh", "mph", "knots"],
        "🚀",
    ),
    C::new(
        "time-converter",
        "Time Converter",
        "Convert between seconds, minutes, hours, days, and years",
        CategoryId::Conversion,
        &["time", "seconds", "minutes", "hours", "days"],
        "⏱️",
    ),
    C::new(
        "energy-converter",
        "Energy Converter",
        "Convert between joules, calories, kilowatt-hours, and BTU",
        CategoryId::Conversion,
        &["energy", "joule", "calorie", "kwh", "btu"],
        "⚡",
    ),
    C::new(
        "pressure-converter",
        "Pressure Converter",
        "Convert between pascal, bar, psi, and atmospheres",
        CategoryId::Conversion,
        &["pressure", "pascal", "bar", "psi", "atm"],
        "🎈",
    ),
    C::new(
        "volume-converter",
        "Volume Converter",
        "Convert between liters, gallons, cups, and cubic units",
        CategoryId::Conversion,
        &["volume", "liter", "gallon", "cup", "cubic"],
        "🧪",
    ),
    C::new(
        "data-storage-converter",
        "Data Storage Converter",
        "Convert between bytes, kilobytes, megabytes, and beyond",
        CategoryId::Conversion,
        &["data", "storage", "byte", "megabyte", "gigabyte"],
        "💾",
    ),
    C::new(
        "fuel-efficiency-converter",
        "Fuel Efficiency Converter",
        "Convert between mpg, km/L, and L/100km",
        CategoryId::Conversion,
        &["fuel", "efficiency", "mpg", "consumption", "mileage"],
        "⛽",
    ),
    C::new(
        "cooking-measurement",
        "Cooking Measurement Converter",
        "Convert cups, tablespoons, teaspoons, and grams for recipes",
        CategoryId::Conversion,
        &["cooking", "measurement", "cups", "tablespoon", "recipe"],
        "🥄",
    ),
];

// ============================================================================
// Date & Time
// ============================================================================

pub const DATETIME: &[C] = &[
    C::new(
        "age-calculator",
        "Age Calculator",
        "Calculate exact age in years, months, and days",
        CategoryId::Datetime,
        &["age", "birthday", "years", "born", "date"],
        "🎂",
    )
    .featured(),
    C::new(
        "days-between-dates",
        "Days Between Dates",
        "Count the days, weeks, and months between two dates",
        CategoryId::Datetime,
        &["days", "between", "dates", "duration", "difference"],
        "📅",
    ),
    C::new(
        "date-add-subtract",
        "Date Add/Subtract Calculator",
        "Add or subtract days, weeks, months, or years from a date",
        CategoryId::Datetime,
        &["date", "add", "subtract", "days", "future"],
        "➕",
    ),
    C::new(
        "countdown-timer",
        "Countdown Timer",
        "Count down to an event or deadline",
        CategoryId::Datetime,
        &["countdown", "timer", "event", "deadline"],
        "⏳",
    ),
    C::new(
        "stopwatch",
        "Stopwatch",
        "Measure elapsed time with lap support",
        CategoryId::Datetime,
        &["stopwatch", "timer", "lap", "elapsed"],
        "⏱️",
    ),
    C::new(
        "work-days-calculator",
        "Work Days Calculator",
        "Count business days between two dates excluding weekends",
        CategoryId::Datetime,
        &["work", "business", "days", "weekdays", "holidays"],
        "🗓️",
    ),
    C::new(
        "world-clock",
        "World Clock",
        "See the current time in cities around the world",
        CategoryId::Datetime,
        &["world", "clock", "time", "zone", "city"],
        "🌍",
    ),
    C::new(
        "meeting-time-planner",
        "Meeting Time Planner",
        "Find a meeting time that works across time zones",
        CategoryId::Datetime,
        &["meeting", "planner", "time", "zone", "schedule"],
        "🤝",
    ),
    C::new(
        "time-until-birthday",
        "Time Until Birthday",
        "Count the days until your next birthday",
        CategoryId::Datetime,
        &["birthday", "countdown", "days", "until"],
        "🎉",
    ),
    C::new(
        "leap-year-checker",
        "Leap Year Checker",
        "Check whether a year is a leap year",
        CategoryId::Datetime,
        &["leap", "year", "calendar", "february"],
        "📆",
    ),
];

// ============================================================================
// Education & Learning
// ============================================================================

pub const EDUCATION: &[C] = &[
    C::new(
        "gpa-calculator",
        "GPA Calculator",
        "Calculate grade point average from course grades and credits",
        CategoryId::Education,
        &["gpa", "grade", "point", "average", "college"],
        "🎓",
    ),
    C::new(
        "grade-percentage",
        "Grade Percentage Calculator",
        "Convert scores to percentages and letter grades",
        CategoryId::Education,
        &["grade", "percentage", "score", "letter", "exam"],
        "📝",
    ),
    C::new(
        "prime-number-checker",
        "Prime Number Checker",
        "Check whether a number is prime and list its factors",
        CategoryId::Education,
        &["prime", "number", "factor", "divisor", "math"],
        "🔢",
    ),
    C::new(
        "factorial-calculator",
        "Factorial Calculator",
        "Calculate the factorial of a whole number",
        CategoryId::Education,
        &["factorial", "permutation", "math", "number"],
        "❗",
    ),
    C::new(
        "mean-median-mode",
        "Mean, Median, Mode Calculator",
        "Calculate central tendency of a data set",
        CategoryId::Education,
        &["mean", "median", "mode", "average", "statistics"],
        "📊",
    ),
    C::new(
        "standard-deviation",
        "Standard Deviation Calculator",
        "Calculate variance and standard deviation of a data set",
        CategoryId::Education,
        &["standard", "deviation", "variance", "statistics", "data"],
        "σ",
    ),
    C::new(
        "probability-calculator",
        "Probability Calculator",
        "Calculate probabilities of single and combined events",
        CategoryId::Education,
        &["probability", "odds", "chance", "statistics", "events"],
        "🎲",
    ),
    C::new(
        "permutation-calculator",
        "Permutation & Combination Calculator",
        "Calculate permutations and combinations of n items",
        CategoryId::Education,
        &["permutation", "combination", "ncr", "npr", "counting"],
        "🔀",
    ),
    C::new(
        "roadmap",
        "Data Science Roadmap",
        "Step-by-step learning roadmap for data science",
        CategoryId::Education,
        &["roadmap", "learning", "data", "science", "career"],
        "🗺️",
    ),
];

// ============================================================================
// Technical/IT
// ============================================================================

pub const TECH: &[C] = &[
    C::new(
        "password-strength-checker",
        "Password Strength Checker",
        "Check how strong a password is and how to improve it",
        CategoryId::Tech,
        &["password", "strength", "security", "entropy"],
        "🔐",
    ),
    C::new(
        "base64-encoder-decoder",
        "Base64 Encoder/Decoder",
        "Encode text to Base64 or decode it back",
        CategoryId::Tech,
        &["base64", "encode", "decode", "text"],
        "🔤",
    ),
    C::new(
        "url-encoder-decoder",
        "URL Encoder/Decoder",
        "Percent-encode or decode URL components",
        CategoryId::Tech,
        &["url", "encode", "decode", "percent", "uri"],
        "🔗",
    ),
    C::new(
        "hex-to-rgb",
        "HEX to RGB Converter",
        "Convert hex colour codes to RGB values",
        CategoryId::Tech,
        &["hex", "rgb", "color", "colour", "convert"],
        "🎨",
    ),
    C::new(
        "rgb-to-hex",
        "RGB to HEX Converter",
        "Convert RGB values to hex colour codes",
        CategoryId::Tech,
        &["rgb", "hex", "color", "colour", "convert"],
        "🖌️",
    ),
    C::new(
        "binary-to-decimal",
        "Binary to Decimal Converter",
        "Convert binary numbers to decimal",
        CategoryId::Tech,
        &["binary", "decimal", "base", "convert", "number"],
        "0️⃣",
    ),
    C::new(
        "decimal-to-binary",
        "Decimal to Binary Converter",
        "Convert decimal numbers to binary",
        CategoryId::Tech,
        &["decimal", "binary", "base", "convert", "number"],
        "1️⃣",
    ),
    C::new(
        "ascii-to-text",
        "ASCII to Text Converter",
        "Convert ASCII codes to readable text",
        CategoryId::Tech,
        &["ascii", "text", "code", "convert", "character"],
        "🔡",
    ),
    C::new(
        "text-to-ascii",
        "Text to ASCII Converter",
        "Convert text to ASCII character codes",
        CategoryId::Tech,
        &["text", "ascii", "code", "convert", "character"],
        "🔠",
    ),
    C::new(
        "ip-address-lookup",
        "IP Address Lookup",
        "Look up location and network details for an IP address",
        CategoryId::Tech,
        &["ip", "address", "lookup", "network", "location"],
        "🌐",
    )
    .requires_api(),
];

// ============================================================================
// Design & Graphics
// ============================================================================

pub const DESIGN: &[C] = &[
    C::new(
        "aspect-ratio",
        "Aspect Ratio Calculator",
        "Calculate and resize dimensions while keeping aspect ratio",
        CategoryId::Design,
        &["aspect", "ratio", "resize", "dimensions", "video"],
        "🖼️",
    ),
    C::new(
        "golden-ratio",
        "Golden Ratio Calculator",
        "Split lengths using the golden ratio",
        CategoryId::Design,
        &["golden", "ratio", "phi", "proportion", "design"],
        "🐚",
    ),
    C::new(
        "dpi-ppi-calculator",
        "DPI/PPI Calculator",
        "Calculate pixel density of a screen or print",
        CategoryId::Design,
        &["dpi", "ppi", "pixel", "density", "screen"],
        "🖥️",
    ),
    C::new(
        "color-contrast-checker",
        "Color Contrast Checker",
        "Check WCAG contrast ratio between two colours",
        CategoryId::Design,
        &["color", "contrast", "wcag", "accessibility"],
        "🌗",
    ),
    C::new(
        "css-unit-converter",
        "CSS Unit Converter",
        "Convert between px, rem, em, and percentage",
        CategoryId::Design,
        &["css", "px", "rem", "em", "unit"],
        "📐",
    ),
    C::new(
        "file-size-estimator",
        "File Size Estimator",
        "Estimate image and video file sizes from dimensions",
        CategoryId::Design,
        &["file", "size", "image", "video", "estimate"],
        "🗂️",
    ),
    C::new(
        "responsive-breakpoint",
        "Responsive Breakpoint Calculator",
        "Plan layout breakpoints for responsive designs",
        CategoryId::Design,
        &["responsive", "breakpoint", "layout", "media", "query"],
        "📱",
    ),
    C::new(
        "angle-converter",
        "Angle Converter",
        "Convert between degrees, radians, and gradians",
        CategoryId::Design,
        &["angle", "degree", "radian", "gradian", "convert"],
        "📐",
    ),
    C::new(
        "font-size-converter",
        "Font Size Converter",
        "Convert font sizes between points, pixels, and ems",
        CategoryId::Design,
        &["font", "size", "point", "pixel", "typography"],
        "🔤",
    ),
];

// ============================================================================
// Lifestyle & Practical
// ============================================================================

pub const LIFESTYLE: &[C] = &[
    C::new(
        "tip-calculator",
        "Tip Calculator",
        "Calculate tip amount and total bill per person",
        CategoryId::Lifestyle,
        &["tip", "gratuity", "restaurant", "bill"],
        "💵",
    )
    .featured(),
    C::new(
        "split-bill-calculator",
        "Split Bill Calculator",
        "Split a bill evenly between friends",
        CategoryId::Lifestyle,
        &["split", "bill", "share", "friends", "group"],
        "🧮",
    ),
    C::new(
        "markup-markdown",
        "Markup & Markdown Calculator",
        "Calculate price markups and discounts",
        CategoryId::Lifestyle,
        &["markup", "markdown", "discount", "price", "margin"],
        "🏷️",
    ),
    C::new(
        "loan-to-value",
        "Loan to Value Calculator",
        "Calculate the loan-to-value ratio of a property",
        CategoryId::Lifestyle,
        &["ltv", "loan", "value", "property", "ratio"],
        "🏘️",
    ),
    C::new(
        "recipe-portion-adjuster",
        "Recipe Portion Adjuster",
        "Scale recipe ingredients to a new number of servings",
        CategoryId::Lifestyle,
        &["recipe", "portion", "servings", "scale", "cooking"],
        "🍲",
    ),
    C::new(
        "fuel-cost-calculator",
        "Fuel Cost Calculator",
        "Estimate fuel cost for a trip",
        CategoryId::Lifestyle,
        &["fuel", "cost", "trip", "gas", "petrol"],
        "🚗",
    ),
    C::new(
        "travel-time-calculator",
        "Travel Time Calculator",
        "Estimate travel time from distance and speed",
        CategoryId::Lifestyle,
        &["travel", "time", "distance", "speed", "trip"],
        "🧭",
    ),
    C::new(
        "electricity-cost",
        "Electricity Cost Calculator",
        "Calculate running cost of electrical appliances",
        CategoryId::Lifestyle,
        &["electricity", "cost", "power", "kwh", "appliance"],
        "🔌",
    ),
    C::new(
        "solar-panel-output",
        "Solar Panel Output Calculator",
        "Estimate daily energy output of a solar panel system",
        CategoryId::Lifestyle,
        &["solar", "panel", "output", "energy", "kwh"],
        "☀️",
    ),
];

// ============================================================================
// Fun Tools
// ============================================================================

pub const FUN: &[C] = &[
    C::new(
        "random-number-generator",
        "Random Number Generator",
        "Generate random numbers within a range",
        CategoryId::Fun,
        &["random", "number", "generator", "range", "lottery"],
        "🎰",
    ),
    C::new(
        "random-password-generator",
        "Random Password Generator",
        "Generate secure random passwords",
        CategoryId::Fun,
        &["password", "generator", "random", "secure"],
        "🔑",
    ),
    C::new(
        "qr-code-generator",
        "QR Code Generator",
        "Create QR codes for links and text",
        CategoryId::Fun,
        &["qr", "code", "generator", "link", "scan"],
        "🔳",
    ),
    C::new(
        "barcode-generator",
        "Barcode Generator",
        "Generate printable barcodes",
        CategoryId::Fun,
        &["barcode", "generator", "ean", "upc", "code128"],
        "▮",
    ),
    C::new(
        "name-compatibility",
        "Name Compatibility",
        "Check the playful compatibility of two names",
        CategoryId::Fun,
        &["name", "compatibility", "match", "fun"],
        "💞",
    ),
    C::new(
        "meme-text-generator",
        "Meme Text Generator",
        "Turn text into meme-style captions",
        CategoryId::Fun,
        &["meme", "text", "generator", "caption", "fun"],
        "😂",
    ),
    C::new(
        "dice-roller",
        "Dice Roller",
        "Roll any number of dice with any number of sides",
        CategoryId::Fun,
        &["dice", "roll", "random", "game", "d20"],
        "🎲",
    ),
    C::new(
        "coin-flip",
        "Coin Flip",
        "Flip a virtual coin",
        CategoryId::Fun,
        &["coin", "flip", "heads", "tails", "random"],
        "🪙",
    ),
    C::new(
        "love-percentage",
        "Love Percentage Calculator",
        "Calculate a playful love score for two names",
        CategoryId::Fun,
        &["love", "percentage", "names", "fun"],
        "❤️",
    ),
    C::new(
        "zodiac-sign",
        "Zodiac Sign Calculator",
        "Find the zodiac sign for a birth date",
        CategoryId::Fun,
        &["zodiac", "sign", "astrology", "birthday", "horoscope"],
        "♈",
    ),
];

// ============================================================================
// Extra
// ============================================================================

pub const EXTRA: &[C] = &[C::new(
    "image-improvement",
    "Image Improvement",
    "Resize, compress, and enhance images in the browser",
    CategoryId::Extra,
    &["image", "resize", "compress", "enhance", "photo"],
    "🖼️",
)];

/// Per-category tables in catalog order.
pub const TABLES: &[(CategoryId, &[C])] = &[
    (CategoryId::Finance, FINANCE),
    (CategoryId::Health, HEALTH),
    (CategoryId::Math, MATH),
    (CategoryId::Conversion, CONVERSION),
    (CategoryId::Datetime, DATETIME),
    (CategoryId::Education, EDUCATION),
    (CategoryId::Tech, TECH),
    (CategoryId::Design, DESIGN),
    (CategoryId::Lifestyle, LIFESTYLE),
    (CategoryId::Fun, FUN),
    (CategoryId::Extra, EXTRA),
];
