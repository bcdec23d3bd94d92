// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// One use case per pipeline. Each reads its input file, runs
// its data/ml steps, and writes its output file:
//
//   ScrapeUseCase   — URLs            → agile_scraped_data.txt
//   CleanUseCase    — scraped buffer  → cleaned_agile_text.txt
//   GenerateUseCase — cleaned buffer  → agile_qa_dataset.txt
//
// Rules for this layer:
//   - No HTML, regex or model code here
//   - No printing here (that's Layer 1)
//   - Only workflow coordination

// Fetch and flatten the source pages
pub mod scrape_use_case;

// Normalise a scraped buffer
pub mod clean_use_case;

// Chunk, generate questions, write the dataset
pub mod generate_use_case;
