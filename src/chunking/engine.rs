//! Chunking engine: segments one article into addressable chunks.
//!
//! The engine runs the numbered-paragraph pass over the article content
//! and hands each resulting block to the configured granularity policy,
//! which may split it further into enumerated sub-items. The scan is
//! pure and synchronous; articles are independent of one another and
//! can be processed in any order.

use super::assembler::assemble;
use super::markers::find_numbered_blocks;
use super::policy::GranularityPolicy;
use super::types::{ArticleContext, LawChunk};
use crate::error::{ChunkerError, Result};
use crate::types::RawLawArticle;

/// Engine for chunking articles under a granularity policy.
pub struct ChunkEngine<P: GranularityPolicy> {
    policy: P,
}

impl<P: GranularityPolicy> ChunkEngine<P> {
    /// Create a new engine for the given policy.
    #[must_use]
    pub fn new(policy: P) -> Self {
        Self { policy }
    }

    /// Chunk a single article.
    ///
    /// Produces at least one chunk; an article without any markers (or
    /// with empty content) degenerates to a single atomic chunk.
    ///
    /// # Errors
    /// Returns an error for an empty `article_no` or when citation
    /// formatting fails. Malformed marker regions are not errors; they
    /// fold into the surrounding chunk text.
    pub fn chunk_article(
        &self,
        article: &RawLawArticle,
    ) -> Result<Vec<LawChunk<P::Hierarchy>>> {
        if article.article_no.is_empty() {
            return Err(ChunkerError::EmptyArticleNumber {
                article_id: article.id.clone(),
            });
        }

        let context = ArticleContext::from_article(article);
        let blocks = find_numbered_blocks(&article.content);

        let drafts = if blocks.is_empty() {
            self.policy
                .chunk_block(&article.content, &article.article_no, None)
        } else {
            check_paragraph_sequence(&article.id, &blocks);
            blocks
                .iter()
                .flat_map(|block| {
                    self.policy
                        .chunk_block(&block.text, &article.article_no, Some(block.number))
                })
                .collect()
        };

        drafts
            .into_iter()
            .map(|draft| assemble(&context, draft))
            .collect()
    }
}

/// Warn when declared paragraph numbers are not 1, 2, 3, ...
///
/// Citations use the declared number while sub-item addressing uses
/// encounter order, so irregular source numbering makes the two
/// diverge. Which one is correct is a product decision; the engine
/// flags the article and keeps the declared numbers as printed.
fn check_paragraph_sequence(article_id: &str, blocks: &[super::markers::NumberedBlock]) {
    for (i, block) in blocks.iter().enumerate() {
        let expected = u32::try_from(i).unwrap_or(u32::MAX).saturating_add(1);
        if block.number != expected {
            tracing::warn!(
                article_id,
                declared = block.number,
                expected,
                "Irregular paragraph numbering, keeping declared number"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunking::policy::{CoarseGrained, FineGrained};
    use crate::chunking::types::SplitStrategy;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn article(id: &str, article_no: &str, content: &str) -> RawLawArticle {
        RawLawArticle {
            id: id.to_string(),
            chapter_no: None,
            chapter_name: None,
            article_no: article_no.to_string(),
            summary: None,
            content: content.to_string(),
            url: format!(
                "https://law.moj.gov.tw/LawClass/LawSingle.aspx?pcode=N0030001&flno={article_no}"
            ),
            related_concepts: Vec::new(),
        }
    }

    #[test]
    fn test_atomic_article() {
        let engine = ChunkEngine::new(FineGrained);
        let input = article(
            "LSA-5",
            "5",
            "雇主不得以強暴、脅迫、拘禁或其他非法之方法，強制勞工從事勞動。",
        );

        let chunks = engine.chunk_article(&input).unwrap();

        assert_eq!(chunks.len(), 1);
        let chunk = &chunks[0];
        assert_eq!(chunk.chunk_id, "LSA-5");
        assert_eq!(chunk.parent_id, "LSA-5");
        assert_eq!(chunk.text, input.content);
        assert_eq!(chunk.metadata.split_strategy, SplitStrategy::Atomic);
        assert!(!chunk.metadata.is_expanded);
        assert_eq!(chunk.metadata.citation_title, "勞動基準法第五條");
        assert_eq!(chunk.metadata.hierarchy.paragraph, None);
        assert_eq!(chunk.metadata.hierarchy.subparagraph, None);
    }

    #[test]
    fn test_numeric_article() {
        let engine = ChunkEngine::new(FineGrained);
        let input = article(
            "LSA-23",
            "23",
            "(1)工資之給付，除當事人有特別約定或按月預付者外，每月至少定期發給二次。\n(2)雇主應置備勞工工資清冊，將發放工資等事項記入。工資清冊應保存五年。",
        );

        let chunks = engine.chunk_article(&input).unwrap();

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].chunk_id, "LSA-23_P1");
        assert_eq!(
            chunks[0].text,
            "(1)工資之給付，除當事人有特別約定或按月預付者外，每月至少定期發給二次。"
        );
        assert_eq!(chunks[0].metadata.split_strategy, SplitStrategy::Numeric);
        assert_eq!(
            chunks[0].metadata.citation_title,
            "勞動基準法第二十三條第一項"
        );
        assert_eq!(chunks[1].chunk_id, "LSA-23_P2");
        assert_eq!(
            chunks[1].metadata.citation_title,
            "勞動基準法第二十三條第二項"
        );
    }

    #[test]
    fn test_contextual_article() {
        let engine = ChunkEngine::new(FineGrained);
        let input = article(
            "LSA-2",
            "2",
            "本法用詞，定義如下：\n一、勞工：指受雇主僱用從事工作獲致工資者。\n二、雇主：指僱用勞工之事業主。",
        );

        let chunks = engine.chunk_article(&input).unwrap();

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].chunk_id, "LSA-2_S1");
        assert_eq!(
            chunks[0].text,
            "本法用詞，定義如下：一、勞工：指受雇主僱用從事工作獲致工資者。"
        );
        assert_eq!(chunks[0].metadata.split_strategy, SplitStrategy::Contextual);
        assert!(chunks[0].metadata.is_expanded);
        assert_eq!(chunks[0].metadata.citation_title, "勞動基準法第二條第一款");
        assert_eq!(chunks[1].chunk_id, "LSA-2_S2");
        assert_eq!(chunks[1].metadata.citation_title, "勞動基準法第二條第二款");
    }

    #[test]
    fn test_dash_article_citation() {
        let engine = ChunkEngine::new(FineGrained);
        let input = article("LSA-84-2", "84-2", "勞工工作年資自受僱之日起算。");

        let chunks = engine.chunk_article(&input).unwrap();

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].chunk_id, "LSA-84-2");
        assert_eq!(chunks[0].metadata.citation_title, "勞動基準法第八十四條之二");
    }

    fn nested_article() -> RawLawArticle {
        article(
            "LSA-79",
            "79",
            concat!(
                "(1)有下列各款規定行為之一者，處新臺幣二萬元以上一百萬元以下罰鍰：\n",
                "一、違反第二十一條第一項、第二十二條至第二十五條規定。\n",
                "二、違反主管機關依第二十七條限期給付工資命令。\n",
                "三、違反中央主管機關依第四十三條所定假期標準。\n",
                "(2)違反第三十條第五項或第四十九條第五項規定者，處新臺幣九萬元以上四十五萬元以下罰鍰。\n",
                "(3)違反第七條規定者，處新臺幣二萬元以上三十萬元以下罰鍰。\n",
                "(4)有前三項規定行為之一者，主管機關得依事業規模加重其罰鍰。"
            ),
        )
    }

    #[test]
    fn test_nested_article_fine() {
        let engine = ChunkEngine::new(FineGrained);
        let chunks = engine.chunk_article(&nested_article()).unwrap();

        // P1 carries 3 sub-items, P2-P4 are plain paragraphs
        assert_eq!(chunks.len(), 6);

        assert_eq!(chunks[0].chunk_id, "LSA-79_P1_S1");
        assert_eq!(
            chunks[0].text,
            "(1)有下列各款規定行為之一者，處新臺幣二萬元以上一百萬元以下罰鍰：一、違反第二十一條第一項、第二十二條至第二十五條規定。"
        );
        assert_eq!(
            chunks[0].metadata.split_strategy,
            SplitStrategy::NumericContextual
        );
        assert_eq!(
            chunks[0].metadata.citation_title,
            "勞動基準法第七十九條第一項第一款"
        );
        assert_eq!(chunks[1].chunk_id, "LSA-79_P1_S2");
        assert_eq!(chunks[2].chunk_id, "LSA-79_P1_S3");

        assert_eq!(chunks[3].chunk_id, "LSA-79_P2");
        assert_eq!(chunks[3].metadata.split_strategy, SplitStrategy::Numeric);
        assert_eq!(
            chunks[3].metadata.citation_title,
            "勞動基準法第七十九條第二項"
        );
        assert_eq!(chunks[4].chunk_id, "LSA-79_P3");
        assert_eq!(chunks[5].chunk_id, "LSA-79_P4");
    }

    #[test]
    fn test_nested_article_coarse() {
        let engine = ChunkEngine::new(CoarseGrained);
        let chunks = engine.chunk_article(&nested_article()).unwrap();

        // The sub-item pass is skipped: one chunk per paragraph
        assert_eq!(chunks.len(), 4);
        for (i, chunk) in chunks.iter().enumerate() {
            let p = u32::try_from(i).unwrap() + 1;
            assert_eq!(chunk.chunk_id, format!("LSA-79_P{p}"));
            assert_eq!(chunk.metadata.split_strategy, SplitStrategy::Numeric);
            assert!(!chunk.metadata.is_expanded);
        }
        // P1 keeps its sub-items inline
        assert!(chunks[0].text.contains("一、"));
        assert!(chunks[0].text.contains("三、"));
    }

    #[test]
    fn test_empty_content_degenerates_to_empty_atomic_chunk() {
        let engine = ChunkEngine::new(FineGrained);
        let chunks = engine.chunk_article(&article("LSA-0", "1", "")).unwrap();

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "");
        assert_eq!(chunks[0].metadata.split_strategy, SplitStrategy::Atomic);
    }

    #[test]
    fn test_empty_article_no_is_an_error() {
        let engine = ChunkEngine::new(FineGrained);
        let result = engine.chunk_article(&article("LSA-X", "", "內容。"));

        assert!(matches!(
            result,
            Err(ChunkerError::EmptyArticleNumber { .. })
        ));
    }

    #[test]
    fn test_chunk_ids_are_unique() {
        let engine = ChunkEngine::new(FineGrained);
        let chunks = engine.chunk_article(&nested_article()).unwrap();

        let ids: HashSet<_> = chunks.iter().map(|c| c.chunk_id.as_str()).collect();
        assert_eq!(ids.len(), chunks.len());
    }

    #[test]
    fn test_chunking_is_idempotent() {
        let engine = ChunkEngine::new(FineGrained);
        let input = nested_article();

        let first = engine.chunk_article(&input).unwrap();
        let second = engine.chunk_article(&input).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_irregular_paragraph_numbering_keeps_declared_numbers() {
        // Source skips (2); citations follow the printed numbers
        let engine = ChunkEngine::new(FineGrained);
        let input = article("LSA-X", "10", "(1)第一項。\n(3)第三項。");

        let chunks = engine.chunk_article(&input).unwrap();

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[1].chunk_id, "LSA-X_P3");
        assert_eq!(chunks[1].metadata.citation_title, "勞動基準法第十條第三項");
    }

    #[test]
    fn test_preamble_is_identical_across_sibling_sub_chunks() {
        let engine = ChunkEngine::new(FineGrained);
        let chunks = engine.chunk_article(&nested_article()).unwrap();

        let preamble = "(1)有下列各款規定行為之一者，處新臺幣二萬元以上一百萬元以下罰鍰：";
        for chunk in &chunks[..3] {
            assert!(chunk.text.starts_with(preamble));
        }
    }
}
